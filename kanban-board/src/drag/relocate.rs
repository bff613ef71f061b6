//! Single-element relocation over an immutable sequence

/// Return a copy of `items` with the element at `from` moved to `to`.
///
/// The element is removed first and then inserted, so every other element
/// keeps its relative order. `to` is clamped to the last index. An
/// out-of-range `from` yields an unchanged copy, and `from == to` is the
/// identity.
pub fn relocate<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    if from >= out.len() {
        return out;
    }
    let to = to.min(out.len() - 1);
    if from != to {
        let item = out.remove(from);
        out.insert(to, item);
    }
    out
}
