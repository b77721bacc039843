use orbit_scene::texture::{checker_pixels, checker_roughness_pixels};

#[cfg(test)]
mod checker_tests {
    use super::*;

    fn pixel(pixels: &[u8], size: u32, x: u32, y: u32) -> [u8; 4] {
        let offset = ((y * size + x) * 4) as usize;
        [
            pixels[offset],
            pixels[offset + 1],
            pixels[offset + 2],
            pixels[offset + 3],
        ]
    }

    #[test]
    fn checker_has_expected_buffer_size() {
        let pixels = checker_pixels(512, 8, [1.0; 3], [0.0; 3]);
        assert_eq!(pixels.len(), 512 * 512 * 4);
    }

    #[test]
    fn checker_alternates_between_the_two_colors() {
        // 8x8 checkers over 64 pixels: each cell is 8 pixels wide.
        let pixels = checker_pixels(64, 8, [1.0, 1.0, 1.0], [0.0, 0.0, 0.0]);

        assert_eq!(pixel(&pixels, 64, 0, 0), [255, 255, 255, 255]);
        assert_eq!(pixel(&pixels, 64, 8, 0), [0, 0, 0, 255], "next cell flips color");
        assert_eq!(pixel(&pixels, 64, 0, 8), [0, 0, 0, 255]);
        assert_eq!(
            pixel(&pixels, 64, 8, 8),
            [255, 255, 255, 255],
            "diagonal neighbors share a color"
        );
    }

    #[test]
    fn checker_is_opaque_everywhere() {
        let pixels = checker_pixels(32, 4, [0.2, 0.4, 0.6], [0.8, 0.1, 0.3]);
        for alpha in pixels.chunks_exact(4).map(|c| c[3]) {
            assert_eq!(alpha, 255);
        }
    }

    #[test]
    fn roughness_values_land_in_the_red_channel() {
        let pixels = checker_roughness_pixels(64, 8, 0.1, 0.5);

        let bright = pixel(&pixels, 64, 0, 0);
        let dark = pixel(&pixels, 64, 8, 0);
        assert_eq!(bright[0], 26, "0.1 rounds to 26/255");
        assert_eq!(dark[0], 128, "0.5 rounds to 128/255");

        // Grayscale: all three channels agree.
        assert_eq!(bright[0], bright[1]);
        assert_eq!(bright[1], bright[2]);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let pixels = checker_pixels(8, 2, [2.0, -1.0, 0.5], [0.0; 3]);
        let first = pixel(&pixels, 8, 0, 0);
        assert_eq!(first[0], 255);
        assert_eq!(first[1], 0);
        assert_eq!(first[2], 128);
    }

    #[test]
    fn oversized_checker_count_degrades_to_single_pixels() {
        // More checkers than pixels: cell size clamps to one pixel rather
        // than dividing by zero.
        let pixels = checker_pixels(4, 16, [1.0; 3], [0.0; 3]);
        assert_eq!(pixels.len(), 4 * 4 * 4);
        assert_ne!(pixel(&pixels, 4, 0, 0), pixel(&pixels, 4, 1, 0));
    }
}
