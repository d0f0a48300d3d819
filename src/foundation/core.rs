pub use kurbo::{Insets, Point, Rect, Size, Vec2};

/// Shrinks `rect` by `insets` without re-normalizing the corners.
///
/// Unlike `Rect - Insets`, edges are never swapped when the insets exceed the rect.
pub(crate) fn inset_rect(rect: Rect, insets: Insets) -> Rect {
    Rect::new(
        rect.x0 + insets.x0,
        rect.y0 + insets.y0,
        rect.x1 - insets.x1,
        rect.y1 - insets.y1,
    )
}

pub(crate) fn add_insets(a: Insets, b: Insets) -> Insets {
    Insets::new(a.x0 + b.x0, a.y0 + b.y0, a.x1 + b.x1, a.y1 + b.y1)
}

/// Exact float equality, except that NaN equals NaN.
pub(crate) fn same_f64(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

pub(crate) fn same_rect(a: Rect, b: Rect) -> bool {
    same_f64(a.x0, b.x0) && same_f64(a.y0, b.y0) && same_f64(a.x1, b.x1) && same_f64(a.y1, b.y1)
}

pub(crate) fn same_insets(a: Insets, b: Insets) -> bool {
    same_f64(a.x0, b.x0) && same_f64(a.y0, b.y0) && same_f64(a.x1, b.x1) && same_f64(a.y1, b.y1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_rect_keeps_inverted_edges() {
        let r = inset_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Insets::uniform(6.0));
        assert_eq!(r, Rect::new(6.0, 6.0, 4.0, 4.0));
        assert!(r.width() < 0.0);
    }

    #[test]
    fn same_f64_is_exact_and_reflexive() {
        assert!(same_f64(1.0, 1.0));
        assert!(!same_f64(1.0, 1.0 + f64::EPSILON));
        assert!(same_f64(f64::NAN, f64::NAN));
        assert!(same_f64(f64::INFINITY, f64::INFINITY));
        assert!(same_f64(0.0, -0.0));
    }

    #[test]
    fn same_rect_compares_every_edge() {
        let a = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(same_rect(a, a));
        assert!(!same_rect(a, Rect::new(0.0, 0.0, 100.0, 50.000_001)));
        assert!(same_insets(Insets::uniform(1.0), Insets::new(1.0, 1.0, 1.0, 1.0)));
    }
}
