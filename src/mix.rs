//! Lane selector alphabets for component access and mixing.

/// Identifies one lane of a [`Vector4`](crate::Vector4).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    X = 0,
    Y = 1,
    Z = 2,
    W = 3,
}

/// Selector alphabet for [`vector_mix`](crate::vector_mix).
///
/// `X`..`W` index into the first input, `A`..`D` into the second. Selectors
/// are passed as const generics: `vector_mix::<{ Mix::X as u32 }, ...>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mix {
    X = 0,
    Y = 1,
    Z = 2,
    W = 3,
    A = 4,
    B = 5,
    C = 6,
    D = 7,
}

/// True when the selector indexes into the first input.
pub(crate) const fn is_first_input(selector: u32) -> bool {
    selector < 4
}

/// The lane the selector picks within its input.
pub(crate) const fn selector_lane(selector: u32) -> usize {
    (selector % 4) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_alphabet_splits_at_four() {
        assert!(is_first_input(Mix::X as u32));
        assert!(is_first_input(Mix::W as u32));
        assert!(!is_first_input(Mix::A as u32));
        assert!(!is_first_input(Mix::D as u32));
    }

    #[test]
    fn selector_lane_wraps_per_input() {
        assert_eq!(selector_lane(Mix::X as u32), 0);
        assert_eq!(selector_lane(Mix::W as u32), 3);
        assert_eq!(selector_lane(Mix::A as u32), 0);
        assert_eq!(selector_lane(Mix::D as u32), 3);
    }
}
