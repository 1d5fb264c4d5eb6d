//! Tests for configuration defaults

#[cfg(test)]
mod tests {
    use constellation::io::configuration::{
        ANIMATION_EXTENSION, DEFAULT_CANVAS_SIZE, FINAL_FRAME_HOLD, FRAME_DELAY_MS,
        IMAGE_EXTENSION, MAX_CANVAS_SIZE, METADATA_EXTENSION,
    };

    // Tests the default canvas is a valid size
    // Verified by setting the default above the maximum
    #[test]
    fn test_default_canvas_within_limits() {
        assert!(DEFAULT_CANVAS_SIZE > 0);
        assert!(DEFAULT_CANVAS_SIZE <= MAX_CANVAS_SIZE);
    }

    // Tests output extensions are distinct so files never collide
    // Verified by reusing the image extension for metadata
    #[test]
    fn test_output_extensions_are_distinct() {
        assert_ne!(IMAGE_EXTENSION, ANIMATION_EXTENSION);
        assert_ne!(IMAGE_EXTENSION, METADATA_EXTENSION);
        assert_ne!(ANIMATION_EXTENSION, METADATA_EXTENSION);
    }

    // Tests the completed frame is held at least as long as the others
    // Verified by setting the hold multiplier to zero
    #[test]
    fn test_final_frame_hold() {
        assert!(FRAME_DELAY_MS > 0);
        assert!(FINAL_FRAME_HOLD >= 1);
    }
}
