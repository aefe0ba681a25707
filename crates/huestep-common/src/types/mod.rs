mod color;

pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_to_hex_is_lowercase_and_padded() {
        let c = Color::from_rgb(0x0a, 0xbc, 0x00);
        assert_eq!(c.to_hex(), "0abc00");
    }

    #[test]
    fn color_magnitudes_divide_by_255() {
        let m = Color::from_rgb(255, 0, 51).magnitudes();
        assert_eq!(m, Magnitudes::new(1.0, 0.0, 0.2));
    }

    #[test]
    fn magnitudes_round_trip_every_byte() {
        for byte in 0..=255u8 {
            let c = Color::from_rgb(byte, byte, byte);
            let m = c.magnitudes();
            assert_eq!((m.r * 255.0) as u8, byte);
        }
    }

    #[test]
    fn magnitudes_lerp_step() {
        let start = Magnitudes::new(0.0, 1.0, 0.5);
        let increment = Magnitudes::new(0.25, -0.25, 0.0);
        assert_eq!(start.step(increment, 2), Magnitudes::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn magnitudes_channels_order() {
        let m = Magnitudes::new(0.1, 0.2, 0.3);
        assert_eq!(m.channels(), [0.1, 0.2, 0.3]);
    }
}
