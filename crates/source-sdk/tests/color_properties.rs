use proptest::prelude::*;
use source_sdk::Color;

proptest! {
    #[test]
    fn channels_read_back_unchanged(r: u8, g: u8, b: u8, a: u8) {
        let c = Color::rgba(r, g, b, a);
        prop_assert_eq!(c.get(), (r, g, b, a));
        prop_assert_eq!((c.r(), c.g(), c.b(), c.a()), (r, g, b, a));
        prop_assert_eq!(c.to_array(), [r, g, b, a]);
    }

    #[test]
    fn float_views_are_channel_over_255(r: u8, g: u8, b: u8, a: u8) {
        let c = Color::rgba(r, g, b, a);
        for (view, channel) in c.base_alpha().into_iter().zip([r, g, b, a]) {
            prop_assert!((view - channel as f32 / 255.0).abs() <= f32::EPSILON);
        }
        prop_assert_eq!(c.base(), [c.r_base(), c.g_base(), c.b_base()]);
    }

    #[test]
    fn equality_follows_bytes(lhs in any::<[u8; 4]>(), rhs in any::<[u8; 4]>()) {
        let [r0, g0, b0, a0] = lhs;
        let [r1, g1, b1, a1] = rhs;
        prop_assert_eq!(Color::rgba(r0, g0, b0, a0) == Color::rgba(r1, g1, b1, a1), lhs == rhs);
    }

    #[test]
    fn any_single_channel_change_breaks_equality(
        bytes in any::<[u8; 4]>(),
        channel in 0usize..4,
        delta in 1u8..=255,
    ) {
        let mut changed = bytes;
        changed[channel] = changed[channel].wrapping_add(delta);

        let [r, g, b, a] = bytes;
        let original = Color::rgba(r, g, b, a);
        let [r, g, b, a] = changed;
        prop_assert_ne!(original, Color::rgba(r, g, b, a));
        prop_assert_eq!(original, original);
    }

    #[test]
    fn grays_have_no_hue_or_saturation(x: u8) {
        let c = Color::rgb(x, x, x);
        prop_assert_eq!(c.hue(), 0.0);
        prop_assert_eq!(c.saturation(), 0.0);
        prop_assert_eq!(c.brightness(), x as f32 / 255.0);
    }

    #[test]
    fn hsb_views_stay_in_unit_range(r: u8, g: u8, b: u8) {
        let c = Color::rgb(r, g, b);
        prop_assert!((0.0..=1.0).contains(&c.hue()));
        prop_assert!((0.0..=1.0).contains(&c.saturation()));
        prop_assert!((0.0..=1.0).contains(&c.brightness()));
    }

    #[test]
    fn hsb_round_trip_loses_at_most_quantization(r: u8, g: u8, b: u8, a: u8) {
        let c = Color::rgba(r, g, b, a);
        let back = Color::from_hsb(c.hue(), c.saturation(), c.brightness());

        prop_assert_eq!(back.a(), 255);
        for (was, now) in [(r, back.r()), (g, back.g()), (b, back.b())] {
            prop_assert!(was.abs_diff(now) <= 1, "{:?} -> {:?}", c, back);
        }
    }
}
