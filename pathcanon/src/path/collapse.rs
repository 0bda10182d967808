//! Syntactic collapsing of `.` and `..` names.
//!
//! Collapsing performs no filesystem queries. It is meant to clean up the
//! output of the resolution primitive (and the unresolved suffix appended to
//! it), so a `..` here cancels its textual predecessor even if that
//! predecessor would be a symlink on disk.
//!
//! The steps are:
//! 1. [`remove_duplicate_separators`]: `//` becomes `/`, and a trailing `/` is
//!    dropped unless the path is the root.
//! 2. [`split_names`]: the text after the leading separator is split into
//!    names.
//! 3. [`is_collapsible`]: sequences without `.` or `..` are left alone.
//! 4. [`CollapsePlan::run`]: `.` names are removed, and each `..` cancels
//!    its nearest surviving predecessor unless that predecessor is `..`.
//! 5. [`CollapsePlan::join`]: the survivors are joined back together.

/// The path separator byte.
pub const SEPARATOR: u8 = b'/';

const CURRENT: &[u8] = b".";
const PARENT: &[u8] = b"..";

/// Copy `path`, dropping every separator that directly follows another
/// separator, then drop a trailing separator unless the result is exactly
/// the root.
///
/// # Examples
///
/// ```
/// use pathcanon::path::collapse::remove_duplicate_separators;
///
/// assert_eq!(remove_duplicate_separators(b"//a///b/"), b"/a/b");
/// assert_eq!(remove_duplicate_separators(b"///"), b"/");
/// ```
#[must_use]
pub fn remove_duplicate_separators(path: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(path.len());
    let mut previous = None;

    for &byte in path {
        if !(byte == SEPARATOR && previous == Some(SEPARATOR)) {
            out.push(byte);
        }
        previous = Some(byte);
    }

    if out.len() > 1 && out.last() == Some(&SEPARATOR) {
        out.pop();
    }

    out
}

/// Split a name sequence (a path without its leading separator) into its
/// non-empty names.
///
/// # Examples
///
/// ```
/// use pathcanon::path::collapse::split_names;
///
/// let names = split_names(b"a//b/c");
/// assert_eq!(names, vec![&b"a"[..], &b"b"[..], &b"c"[..]]);
/// assert!(split_names(b"").is_empty());
/// ```
#[must_use]
pub fn split_names(names: &[u8]) -> Vec<&[u8]> {
    names
        .split(|&b| b == SEPARATOR)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Whether a name sequence contains at least one literal `.` or `..` name.
#[must_use]
pub fn is_collapsible(names: &[&[u8]]) -> bool {
    names.iter().any(|&name| name == CURRENT || name == PARENT)
}

/// One entry of a [`CollapsePlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a> {
    /// A name that is still part of the path.
    Name(&'a [u8]),
    /// A name that has been collapsed away.
    Removed,
}

impl Slot<'_> {
    fn is_parent(self) -> bool {
        self == Slot::Name(PARENT)
    }
}

/// Per-name removal state for a single collapse pass.
///
/// There is one slot per name of the original sequence. Slots only ever go
/// from [`Slot::Name`] to [`Slot::Removed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsePlan<'a> {
    slots: Vec<Slot<'a>>,
}

impl<'a> CollapsePlan<'a> {
    /// Create a plan in which every name survives.
    #[must_use]
    pub fn new(names: &[&'a [u8]]) -> Self {
        Self {
            slots: names.iter().map(|&name| Slot::Name(name)).collect(),
        }
    }

    /// The current slots, in original order.
    #[must_use]
    pub fn slots(&self) -> &[Slot<'a>] {
        &self.slots
    }

    /// Remove `.` names and cancel `..` names against their predecessors.
    ///
    /// The scan is strictly left to right. A `..` cancels the nearest
    /// preceding slot that has not been removed, provided that slot is not
    /// itself `..`; otherwise the `..` is kept.
    pub fn run(&mut self) {
        for i in 0..self.slots.len() {
            match self.slots[i] {
                Slot::Name(name) if name == CURRENT => self.slots[i] = Slot::Removed,
                Slot::Name(name) if name == PARENT => {
                    let predecessor = self.slots[..i]
                        .iter()
                        .rposition(|&slot| slot != Slot::Removed)
                        .filter(|&j| !self.slots[j].is_parent());

                    if let Some(j) = predecessor {
                        self.slots[j] = Slot::Removed;
                        self.slots[i] = Slot::Removed;
                    }
                }
                _ => {}
            }
        }
    }

    /// Join the surviving names with single separators.
    ///
    /// An absolute plan always starts with a separator, so an absolute plan
    /// with no survivors is the root. A relative plan with no survivors is
    /// empty.
    #[must_use]
    pub fn join(&self, absolute: bool) -> Vec<u8> {
        let mut out = Vec::new();
        if absolute {
            out.push(SEPARATOR);
        }

        let mut first = true;
        for slot in &self.slots {
            if let Slot::Name(name) = slot {
                if !first {
                    out.push(SEPARATOR);
                }
                out.extend_from_slice(name);
                first = false;
            }
        }

        out
    }
}

/// Collapse `path` syntactically.
///
/// Duplicate and trailing separators are removed, `.` names are dropped and
/// each `..` cancels the name before it where possible. A leading separator
/// is preserved, and a `..` with nothing left to cancel is kept.
///
/// # Examples
///
/// ```
/// use pathcanon::path::collapse::collapse;
///
/// assert_eq!(collapse(b"/a/./b/../c"), b"/a/c");
/// assert_eq!(collapse(b"/../a"), b"/../a");
/// assert_eq!(collapse(b"/a//b///c/"), b"/a/b/c");
/// ```
#[must_use]
pub fn collapse(path: &[u8]) -> Vec<u8> {
    let deduplicated = remove_duplicate_separators(path);
    let absolute = deduplicated.first() == Some(&SEPARATOR);
    let names_start = usize::from(absolute);

    let names = split_names(&deduplicated[names_start..]);
    if !is_collapsible(&names) {
        return deduplicated;
    }

    let mut plan = CollapsePlan::new(&names);
    plan.run();
    plan.join(absolute)
}
