/// Packed 8-bit RGBA color, laid out like the engine's `Color`.
///
/// The four bytes are the only state. Float accessors (`r_base` and friends)
/// and the HSB functions are views computed from them.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    rgba: [u8; 4],
}

/// `value * 255` converted the way a C cast does it on x86: truncate toward
/// zero to a machine int, then keep the low byte.
///
/// Inputs outside `[0, 1]` therefore wrap instead of clamping, e.g. `1.5` gives
/// 126 and `-0.5` gives 129. Existing configs may depend on this.
fn channel_from_float(value: f32) -> u8 {
    (value * 255.0) as i32 as u8
}

fn channel_to_float(value: u8) -> f32 {
    value as f32 / 255.0
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { rgba: [r, g, b, a] }
    }

    /// Opaque color from channels in `[0, 1]`. See [`Color::set_float`] for
    /// what happens outside that range.
    pub fn from_float(r: f32, g: f32, b: f32) -> Self {
        Self::from_float_rgba(r, g, b, 1.0)
    }

    pub fn from_float_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        let mut color = Self::default();
        color.set_float(r, g, b, a);
        color
    }

    /// Inverse of [`Color::base`]; alpha is opaque.
    pub fn from_base3(rgb: &[f32; 3]) -> Self {
        Self::rgb(
            channel_from_float(rgb[0]),
            channel_from_float(rgb[1]),
            channel_from_float(rgb[2]),
        )
    }

    /// Inverse of [`Color::base_alpha`].
    pub fn from_base4(rgba: &[f32; 4]) -> Self {
        Self::rgba(
            channel_from_float(rgba[0]),
            channel_from_float(rgba[1]),
            channel_from_float(rgba[2]),
            channel_from_float(rgba[3]),
        )
    }

    /// Overwrites all four channels.
    pub fn set(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.rgba = [r, g, b, a];
    }

    /// Overwrites all four channels from floats in `[0, 1]`.
    ///
    /// Out-of-range values are truncated, not clamped (see module notes on
    /// `channel_from_float`).
    pub fn set_float(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.rgba = [
            channel_from_float(r),
            channel_from_float(g),
            channel_from_float(b),
            channel_from_float(a),
        ];
    }

    /// Returns `(r, g, b, a)`.
    pub const fn get(&self) -> (u8, u8, u8, u8) {
        let [r, g, b, a] = self.rgba;
        (r, g, b, a)
    }

    pub const fn to_array(self) -> [u8; 4] {
        self.rgba
    }

    pub const fn r(&self) -> u8 { self.rgba[0] }
    pub const fn g(&self) -> u8 { self.rgba[1] }
    pub const fn b(&self) -> u8 { self.rgba[2] }
    pub const fn a(&self) -> u8 { self.rgba[3] }

    pub fn r_base(&self) -> f32 { channel_to_float(self.rgba[0]) }
    pub fn g_base(&self) -> f32 { channel_to_float(self.rgba[1]) }
    pub fn b_base(&self) -> f32 { channel_to_float(self.rgba[2]) }
    pub fn a_base(&self) -> f32 { channel_to_float(self.rgba[3]) }

    /// RGB as floats in `[0, 1]`.
    pub fn base(&self) -> [f32; 3] {
        [self.r_base(), self.g_base(), self.b_base()]
    }

    /// RGBA as floats in `[0, 1]`.
    pub fn base_alpha(&self) -> [f32; 4] {
        [self.r_base(), self.g_base(), self.b_base(), self.a_base()]
    }

    /// Packs into the `0xAABBGGRR` layout immediate-mode GUI renderers take.
    pub const fn to_u32(self) -> u32 {
        let [r, g, b, a] = self.rgba;
        (a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | r as u32
    }

    /// Hue as a fraction of a full turn, in `[0, 1)`. Grays have hue 0.
    pub fn hue(&self) -> f32 {
        let [r, g, b, _] = self.rgba;
        if r == g && g == b {
            return 0.0;
        }

        let [r, g, b] = self.base();
        let max = r.max(g.max(b));
        let min = r.min(g.min(b));
        if max == min {
            return 0.0;
        }

        let delta = max - min;
        let mut hue = if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };

        hue *= 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        hue / 360.0
    }

    /// 0 for black, otherwise `(max - min) / max`.
    pub fn saturation(&self) -> f32 {
        let [r, g, b] = self.base();
        let max = r.max(g.max(b));
        let min = r.min(g.min(b));
        if max == 0.0 {
            return 0.0;
        }

        (max - min) / max
    }

    /// The largest of the three channels, in `[0, 1]`.
    pub fn brightness(&self) -> f32 {
        let [r, g, b] = self.base();
        r.max(g.max(b))
    }

    /// Builds an opaque color from hue (fraction of a turn), saturation and
    /// brightness, all nominally in `[0, 1]`.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        let h = (hue % 1.0) / (60.0 / 360.0);
        let sector = h as i32;
        let f = h - sector as f32;
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match sector {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            // 5, and negative hues
            _ => (brightness, p, q),
        };

        Self::rgb(channel_from_float(r), channel_from_float(g), channel_from_float(b))
    }
}

#[cfg(feature = "egui")]
impl From<Color> for egui::Color32 {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.rgba;
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

#[cfg(feature = "egui")]
impl From<egui::Color32> for Color {
    fn from(color: egui::Color32) -> Self {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        Self::rgba(r, g, b, a)
    }
}

/// Compressed HDR lighting sample as the engine stores it: three mantissa
/// bytes sharing one signed power-of-two exponent.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorRGBExp32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub exponent: i8,
}

const _: () = assert!(size_of::<ColorRGBExp32>() == 4);
const _: () = assert!(align_of::<ColorRGBExp32>() == 1);
const _: () = assert!(size_of::<Color>() == 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_defaults_to_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).get(), (1, 2, 3, 255));
        assert_eq!(Color::from_float(0.0, 0.0, 0.0).a(), 255);
    }

    #[test]
    fn float_channels_truncate() {
        let c = Color::from_float_rgba(0.5, 1.0, 0.0, 0.25);
        assert_eq!(c.get(), (127, 255, 0, 63));
    }

    #[test]
    fn out_of_range_floats_wrap_instead_of_clamping() {
        let c = Color::from_float(1.5, -0.5, 2.0);
        // 382 & 0xff, -127 & 0xff, 510 & 0xff
        assert_eq!((c.r(), c.g(), c.b()), (126, 129, 254));
    }

    #[test]
    fn set_overwrites_every_channel() {
        let mut c = Color::rgba(9, 9, 9, 9);
        c.set(1, 2, 3, 4);
        assert_eq!(c, Color::rgba(1, 2, 3, 4));
        c.set_float(0.0, 0.0, 0.0, 1.0);
        assert_eq!(c, Color::BLACK);
    }

    #[test]
    fn equality_is_bytewise() {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(c, Color::rgba(1, 2, 3, 4));
        assert_ne!(c, Color::rgba(1, 2, 3, 5));
        assert_ne!(c, Color::rgba(0, 2, 3, 4));
    }

    #[test]
    fn base_views() {
        let c = Color::rgba(255, 0, 51, 102);
        assert_eq!(c.base(), [1.0, 0.0, 0.2]);
        assert_eq!(c.base_alpha(), [1.0, 0.0, 0.2, 0.4]);
        assert_eq!(Color::from_base4(&[1.0, 0.0, 0.5, 1.0]), Color::rgba(255, 0, 127, 255));
        assert_eq!(Color::from_base3(&[0.0, 1.0, 0.0]), Color::rgb(0, 255, 0));
    }

    #[test]
    fn packs_abgr() {
        assert_eq!(Color::rgba(0x11, 0x22, 0x33, 0x44).to_u32(), 0x4433_2211);
    }

    #[test]
    fn green_is_a_third_of_a_turn() {
        let c = Color::rgb(0, 255, 0);
        assert!((c.hue() - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(c.saturation(), 1.0);
        assert_eq!(c.brightness(), 1.0);
    }

    #[test]
    fn hue_of_magenta_wraps_into_range() {
        // (g - b) / delta is negative for magenta, so it goes through the +360 path.
        let c = Color::rgb(255, 0, 255);
        assert!((c.hue() - 300.0 / 360.0).abs() < 1e-6);
    }

    #[test]
    fn black_has_zero_saturation() {
        assert_eq!(Color::BLACK.saturation(), 0.0);
        assert_eq!(Color::BLACK.hue(), 0.0);
    }

    #[test]
    fn hsb_round_trips_primaries() {
        for c in [
            Color::rgb(255, 0, 0),
            Color::rgb(0, 255, 0),
            Color::rgb(0, 0, 255),
            Color::rgb(255, 255, 0),
        ] {
            assert_eq!(Color::from_hsb(c.hue(), c.saturation(), c.brightness()), c);
        }
    }

    #[test]
    fn negative_hue_lands_in_last_sector() {
        // -0.5 turns is sector -3 with no remainder: (brightness, p, q) = (1, 0, 1)
        assert_eq!(Color::from_hsb(-0.5, 1.0, 1.0), Color::rgb(255, 0, 255));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_channel_bytes() {
        let json = serde_json::to_string(&Color::rgba(1, 2, 3, 4)).unwrap();
        assert_eq!(json, r#"{"rgba":[1,2,3,4]}"#);
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), Color::rgba(1, 2, 3, 4));
    }

    #[cfg(feature = "egui")]
    #[test]
    fn converts_to_and_from_egui() {
        let converted: egui::Color32 = Color::rgb(10, 20, 30).into();
        assert_eq!(converted, egui::Color32::from_rgb(10, 20, 30));
        assert_eq!(Color::from(converted), Color::rgb(10, 20, 30));
    }

    #[test]
    fn rgb_exp32_is_four_packed_bytes() {
        let sample = ColorRGBExp32 { r: 1, g: 2, b: 3, exponent: -4 };
        let bytes: [u8; 4] = unsafe { std::mem::transmute(sample) };
        assert_eq!(bytes, [1, 2, 3, 0xfc]);
    }
}
