use std::fmt;

/// Part number shared by members of the same cut length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameLabel(pub u32);

impl fmt::Display for FrameLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

/// Labels members by cut length.
///
/// Members are stably sorted by length, shortest first, and each distinct
/// length gets the next label starting at `F1`. Lengths are compared exactly:
/// two lengths that differ only by floating-point noise get different
/// labels. Round lengths before calling if that matters.
///
/// Returns the keys in sorted order with their labels.
#[must_use]
pub fn label_by_length<K: Copy>(lengths: &[(K, f64)]) -> Vec<(K, FrameLabel)> {
    let mut sorted: Vec<(K, f64)> = lengths.to_vec();
    sorted.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut labels = Vec::with_capacity(sorted.len());
    let mut current: Option<(f64, FrameLabel)> = None;
    for (key, length) in sorted {
        let label = match current {
            #[allow(clippy::float_cmp)]
            Some((previous, label)) if previous == length => label,
            Some((_, FrameLabel(n))) => FrameLabel(n + 1),
            None => FrameLabel(1),
        };
        current = Some((length, label));
        labels.push((key, label));
    }
    labels
}
