mod tests {
    use strip_effects::{
        color::{Rgb, rgb_from_u32, rgb_to_u32},
        effect::{draw_bar, fade_strip},
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_fade_floors_each_channel() {
        let mut leds = [0x00FF_8003, 0x0064_C801];
        fade_strip(&mut leds, 2, 0.5);
        assert_eq!(rgb_from_u32(leds[0]), Rgb::new(127, 64, 1));
        assert_eq!(rgb_from_u32(leds[1]), Rgb::new(50, 100, 0));
    }

    #[test]
    fn test_fade_zero_blanks() {
        let mut leds = [0x00FF_FFFF; 4];
        fade_strip(&mut leds, 4, 0.0);
        assert_eq!(leds, [0; 4]);
    }

    #[test]
    fn test_fade_one_keeps_colors_and_clears_top_byte() {
        let mut leds = [0x0012_3456, 0xFF12_3456];
        fade_strip(&mut leds, 2, 1.0);
        assert_eq!(leds, [0x0012_3456, 0x0012_3456]);
    }

    #[test]
    fn test_fade_clamps_factor() {
        let source = [0x00FF_8040, 0x0001_0203, 0x0080_8080];

        let mut below = source;
        let mut zero = source;
        fade_strip(&mut below, 3, -0.5);
        fade_strip(&mut zero, 3, 0.0);
        assert_eq!(below, zero);

        let mut above = source;
        let mut one = source;
        fade_strip(&mut above, 3, 2.0);
        fade_strip(&mut one, 3, 1.0);
        assert_eq!(above, one);
        assert_eq!(above, source);
    }

    #[test]
    fn test_fade_non_positive_count_is_noop() {
        let source = [0xFF12_3456; 3];

        let mut leds = source;
        fade_strip(&mut leds, 0, 0.5);
        assert_eq!(leds, source);

        fade_strip(&mut leds, -7, 0.5);
        assert_eq!(leds, source);
    }

    #[test]
    fn test_fade_empty_buffer_is_noop() {
        let mut leds: [u32; 0] = [];
        fade_strip(&mut leds, 10, 0.5);
        assert_eq!(leds, []);
    }

    #[test]
    fn test_fade_nan_blanks() {
        let mut leds = [0x00FF_FFFF; 2];
        fade_strip(&mut leds, 2, f32::NAN);
        assert_eq!(leds, [0; 2]);
    }

    #[test]
    fn test_fade_only_first_count() {
        let mut leds = [0x00FF_FFFF; 4];
        fade_strip(&mut leds, 2, 0.0);
        assert_eq!(leds, [0, 0, 0x00FF_FFFF, 0x00FF_FFFF]);
    }

    #[test]
    fn test_fade_count_past_end() {
        let mut leds = [0x00FF_FFFF; 3];
        fade_strip(&mut leds, 100, 0.5);
        assert_eq!(leds, [0x007F_7F7F; 3]);
    }

    #[test]
    fn test_draw_bar_non_positive_intensity_is_noop() {
        let source = [0x0010_2030; 5];

        let mut leds = source;
        draw_bar(&mut leds, 0, 5, WHITE, 0.0);
        assert_eq!(leds, source);

        draw_bar(&mut leds, 0, 5, WHITE, -1.0);
        assert_eq!(leds, source);

        draw_bar(&mut leds, 0, 5, WHITE, f32::NAN);
        assert_eq!(leds, source);
    }

    #[test]
    fn test_draw_bar_non_positive_length_is_noop() {
        let mut leds = [0u32; 5];
        draw_bar(&mut leds, 1, 0, WHITE, 1.0);
        draw_bar(&mut leds, 1, -3, WHITE, 1.0);
        assert_eq!(leds, [0; 5]);

        let mut empty: [u32; 0] = [];
        draw_bar(&mut empty, 0, 5, WHITE, 1.0);
        assert_eq!(empty, []);
    }

    #[test]
    fn test_draw_bar_saturates() {
        let mut leds = [0x00FF_0000];
        draw_bar(&mut leds, 0, 1, Rgb::new(100, 0, 0), 1.0);
        assert_eq!(leds[0], 0x00FF_0000);

        let mut leds = [rgb_to_u32(Rgb::new(200, 10, 250))];
        draw_bar(&mut leds, 0, 1, Rgb::new(100, 20, 10), 1.0);
        assert_eq!(rgb_from_u32(leds[0]), Rgb::new(255, 30, 255));
    }

    #[test]
    fn test_draw_bar_truncates_contribution() {
        let mut leds = [0u32; 1];
        draw_bar(&mut leds, 0, 1, Rgb::new(255, 3, 1), 0.5);
        assert_eq!(rgb_from_u32(leds[0]), Rgb::new(127, 1, 0));
    }

    #[test]
    fn test_draw_bar_clamps_intensity() {
        let mut above = [0u32; 3];
        let mut one = [0u32; 3];
        draw_bar(&mut above, 0, 3, Rgb::new(10, 20, 30), 4.0);
        draw_bar(&mut one, 0, 3, Rgb::new(10, 20, 30), 1.0);
        assert_eq!(above, one);
        assert_eq!(above, [0x000A_141E; 3]);
    }

    #[test]
    fn test_draw_bar_negative_start_keeps_end() {
        let mut leds = [0u32; 6];
        draw_bar(&mut leds, -3, 5, RED, 1.0);
        assert_eq!(leds, [0x00FF_0000, 0x00FF_0000, 0, 0, 0, 0]);

        let mut leds = [0u32; 6];
        draw_bar(&mut leds, -8, 5, RED, 1.0);
        assert_eq!(leds, [0; 6]);
    }

    #[test]
    fn test_draw_bar_past_end_is_clipped() {
        let mut leds = [0u32; 4];
        draw_bar(&mut leds, 2, 10, RED, 1.0);
        assert_eq!(leds, [0, 0, 0x00FF_0000, 0x00FF_0000]);

        let mut leds = [0u32; 4];
        draw_bar(&mut leds, 9, 1, RED, 1.0);
        assert_eq!(leds, [0; 4]);
    }

    #[test]
    fn test_draw_bar_clears_top_byte_in_window_only() {
        let mut leds = [0xFF00_0000; 3];
        draw_bar(&mut leds, 1, 1, Rgb::new(0, 0, 1), 1.0);
        assert_eq!(leds, [0xFF00_0000, 0x0000_0001, 0xFF00_0000]);
    }

    #[test]
    fn test_draw_then_fade() {
        let mut leds = [0u32; 10];

        draw_bar(&mut leds, 2, 3, RED, 1.0);
        for (i, led) in leds.iter().enumerate() {
            let expected = if (2..5).contains(&i) { 0x00FF_0000 } else { 0 };
            assert_eq!(*led, expected, "index {i}");
        }

        fade_strip(&mut leds, 10, 0.5);
        for (i, led) in leds.iter().enumerate() {
            let expected = if (2..5).contains(&i) { 0x007F_0000 } else { 0 };
            assert_eq!(*led, expected, "index {i}");
        }
    }
}
