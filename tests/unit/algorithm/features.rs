//! Tests for feature recording, write-once labels and publication

#[cfg(test)]
mod tests {
    use constellation::TokenError;
    use constellation::algorithm::features::{FEATURE_KEYS, FeatureRecorder, FeatureValue};
    use constellation::algorithm::field::{ConstellationSize, StarColor, StarSize};
    use constellation::algorithm::path::PathAlgorithm;
    use constellation::algorithm::sky::Sky;

    fn complete_recorder() -> FeatureRecorder {
        let mut recorder = FeatureRecorder::new();
        recorder.record_sky(Sky::Dusk).expect("sky");
        recorder
            .record_constellation_size(ConstellationSize::Micro)
            .expect("constellation size");
        recorder
            .record_algorithm(PathAlgorithm::Orderly)
            .expect("algorithm");
        recorder
    }

    // Tests counters accumulate per category
    // Verified by incrementing the wrong counter for yellow
    #[test]
    fn test_counters_accumulate() {
        let mut recorder = complete_recorder();
        for color in [StarColor::Gold, StarColor::Yellow, StarColor::Yellow, StarColor::White] {
            recorder.count_color(color);
        }
        for size in [StarSize::Micro, StarSize::Medium, StarSize::Mega, StarSize::Giga] {
            recorder.count_size(size);
        }

        let features = recorder.finish().expect("complete");
        assert_eq!(features.gold_stars, 1);
        assert_eq!(features.yellow_stars, 2);
        assert_eq!(features.white_stars, 1);
        assert_eq!(features.color_total(), 4);
        assert_eq!(features.size_total(), 4);
        assert_eq!(features.giga_stars, 1);
    }

    // Tests each label can only be written once
    // Verified by overwriting existing labels
    #[test]
    fn test_labels_are_write_once() {
        let mut recorder = complete_recorder();

        assert!(matches!(
            recorder.record_sky(Sky::Midnight),
            Err(TokenError::FeatureRewrite { feature: "sky" })
        ));
        assert!(matches!(
            recorder.record_constellation_size(ConstellationSize::Giga),
            Err(TokenError::FeatureRewrite {
                feature: "constellation size"
            })
        ));
        assert!(matches!(
            recorder.record_algorithm(PathAlgorithm::Chaotic),
            Err(TokenError::FeatureRewrite {
                feature: "algorithm"
            })
        ));

        let features = recorder.finish().expect("complete");
        assert_eq!(features.sky, Sky::Dusk);
        assert_eq!(features.algorithm, PathAlgorithm::Orderly);
    }

    // Tests publication fails when a label is missing
    // Verified by defaulting missing labels
    #[test]
    fn test_finish_requires_all_labels() {
        let mut recorder = FeatureRecorder::new();
        recorder.record_sky(Sky::Moonlit).expect("sky");

        assert!(matches!(
            recorder.finish(),
            Err(TokenError::MissingFeature {
                feature: "constellation size"
            })
        ));
    }

    // Tests the published set lists exactly the ten keys in order
    // Verified by dropping the algorithm entry
    #[test]
    fn test_entries_cover_every_key() {
        let features = complete_recorder().finish().expect("complete");
        let entries = features.entries();

        let keys: Vec<&str> = entries.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, FEATURE_KEYS.to_vec());
        assert!(entries.contains(&("sky", FeatureValue::Label("dusk"))));
        assert!(entries.contains(&("white stars", FeatureValue::Count(0))));
    }

    // Tests JSON serialization uses the published key names and lowercase labels
    // Verified by removing the serde rename attributes
    #[test]
    fn test_features_serialize_with_feature_keys() {
        let features = complete_recorder().finish().expect("complete");
        let value = serde_json::to_value(features).expect("serialize");
        let object = value.as_object().expect("json object");

        assert_eq!(object.len(), 10);
        for key in FEATURE_KEYS {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(object.get("sky"), Some(&serde_json::json!("dusk")));
        assert_eq!(
            object.get("constellation size"),
            Some(&serde_json::json!("micro"))
        );
        assert_eq!(object.get("algorithm"), Some(&serde_json::json!("orderly")));
        assert_eq!(object.get("gold stars"), Some(&serde_json::json!(0)));
    }
}
