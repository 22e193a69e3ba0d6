// kem/src/kyber/events.rs

//! In-memory journal of protocol steps.
//!
//! Separate from the `log` facade: this is data a presentation layer renders,
//! not diagnostics.

use std::collections::VecDeque;

use edukyber_algorithms::poly::stats::PolyStatistics;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The phase an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CryptoOperation {
    /// KeyGen
    KeyGeneration,
    /// Encrypt
    Encryption,
    /// Decrypt
    Decryption,
}

impl CryptoOperation {
    /// Short identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            CryptoOperation::KeyGeneration => "keygen",
            CryptoOperation::Encryption => "encrypt",
            CryptoOperation::Decryption => "decrypt",
        }
    }
}

/// Severity/flavour of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventKind {
    /// Intermediate value produced
    Info,
    /// Phase started
    Action,
    /// Phase or step finished as expected
    Success,
    /// Outcome differs from what was expected
    Error,
}

/// One journal entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CryptoEvent {
    /// Monotonic position in the session, starting at 0
    pub sequence: u64,
    /// Phase
    pub operation: CryptoOperation,
    /// Step identifier within the phase, e.g. `"matrix_A"`
    pub step: &'static str,
    /// Human-readable description
    pub message: String,
    /// Flavour
    pub kind: EventKind,
    /// Centered statistics of the value this step produced, if any
    pub statistics: Option<PolyStatistics>,
}

/// Bounded event history; the oldest entries are evicted first.
#[derive(Debug, Clone)]
pub struct EventJournal {
    entries: VecDeque<CryptoEvent>,
    capacity: usize,
    next_sequence: u64,
}

impl EventJournal {
    /// Default number of retained entries
    pub const DEFAULT_CAPACITY: usize = 50;

    /// Empty journal keeping at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_sequence: 0,
        }
    }

    /// Appends an event, evicting the oldest if full.
    pub fn record<S: Into<String>>(
        &mut self,
        operation: CryptoOperation,
        step: &'static str,
        kind: EventKind,
        message: S,
    ) {
        self.push(operation, step, kind, message.into(), None);
    }

    /// Appends an event carrying the statistics of the value the step produced.
    ///
    /// The message gets a `mean/std/norm` suffix so text renderers show them too.
    pub fn record_with_statistics<S: Into<String>>(
        &mut self,
        operation: CryptoOperation,
        step: &'static str,
        kind: EventKind,
        message: S,
        statistics: PolyStatistics,
    ) {
        let message = format!(
            "{} (mean {:.2}, std {:.2}, norm {:.1})",
            message.into(),
            statistics.mean,
            statistics.std_dev,
            statistics.norm
        );
        self.push(operation, step, kind, message, Some(statistics));
    }

    fn push(
        &mut self,
        operation: CryptoOperation,
        step: &'static str,
        kind: EventKind,
        message: String,
        statistics: Option<PolyStatistics>,
    ) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(CryptoEvent {
            sequence: self.next_sequence,
            operation,
            step,
            message,
            kind,
            statistics,
        });
        self.next_sequence += 1;
    }

    /// Retained events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &CryptoEvent> {
        self.entries.iter()
    }

    /// Most recent event
    pub fn last(&self) -> Option<&CryptoEvent> {
        self.entries.back()
    }

    /// Number of retained events
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is retained
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all retained events. Sequence numbers keep increasing.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for EventJournal {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}
