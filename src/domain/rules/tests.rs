// Unit tests for parameter validation

use super::*;

fn markers(from: Option<&str>, to: Option<&str>) -> TimeMarkers {
    TimeMarkers::new(from.map(str::to_string), to.map(str::to_string))
}

#[test]
fn test_loop_count_must_be_positive() {
    assert!(ParameterValidator::validate_loops(1).is_ok());
    assert!(ParameterValidator::validate_loops(12).is_ok());

    let err = ParameterValidator::validate_loops(0).unwrap_err();
    assert!(err.is_user_facing());
    assert_eq!(err.to_string(), "Number of loops must be > 0");
    assert!(ParameterValidator::validate_loops(-3).is_err());
}

#[test]
fn test_validate_dispatches_per_operation() {
    let loop_zero: Operation<TimeMarkers> = Operation::Loop {
        input: "in.mp4".to_string(),
        loops: 0,
    };
    assert!(ParameterValidator::validate(&loop_zero).is_err());

    let resize: Operation<TimeMarkers> = Operation::Resize {
        input: "in.mp4".to_string(),
        width: 640,
        height: 0,
    };
    assert_eq!(
        ParameterValidator::validate(&resize).unwrap_err().to_string(),
        "Height must be > 0"
    );

    let speed: Operation<TimeMarkers> = Operation::SpeedVideo {
        input: "in.mp4".to_string(),
        speed: 0.0,
    };
    assert!(ParameterValidator::validate(&speed).is_err());

    let fps: Operation<TimeMarkers> = Operation::SetFps {
        input: "in.mp4".to_string(),
        fps: f64::NAN,
    };
    assert!(ParameterValidator::validate(&fps).is_err());

    let reverse: Operation<TimeMarkers> = Operation::Reverse {
        input: "in.mp4".to_string(),
    };
    assert!(ParameterValidator::validate(&reverse).is_ok());
}

#[test]
fn test_markers_may_be_partial() {
    assert!(ParameterValidator::validate_markers(&markers(None, None)).is_ok());
    assert!(ParameterValidator::validate_markers(&markers(Some("00:00:05"), None)).is_ok());
    assert!(ParameterValidator::validate_markers(&markers(None, Some("90"))).is_ok());
}

#[test]
fn test_markers_must_parse() {
    let err = ParameterValidator::validate_markers(&markers(Some("five"), None)).unwrap_err();
    assert!(err.is_user_facing());
    assert!(ParameterValidator::validate_markers(&markers(None, Some("00:99:00"))).is_err());
}

#[test]
fn test_markers_must_be_ordered() {
    assert!(ParameterValidator::validate_markers(&markers(Some("00:00:05"), Some("00:00:10"))).is_ok());
    assert!(ParameterValidator::validate_markers(&markers(Some("00:00:10"), Some("00:00:05"))).is_err());
    assert!(ParameterValidator::validate_markers(&markers(Some("10"), Some("00:00:10"))).is_err());
}

#[test]
fn test_video_speed_needs_a_usable_stretch_factor() {
    let speed_video = |speed: f64| -> Operation<TimeMarkers> {
        Operation::SpeedVideo {
            input: "in.mp4".to_string(),
            speed,
        }
    };

    assert!(ParameterValidator::validate(&speed_video(MAX_VIDEO_SPEED)).is_ok());
    assert!(ParameterValidator::validate(&speed_video(0.01)).is_ok());

    let err = ParameterValidator::validate(&speed_video(250.0)).unwrap_err();
    assert!(err.is_user_facing());
    assert!(err.to_string().contains("at most 200"));

    // Subnormal speeds overflow the factor to infinity
    assert!(ParameterValidator::validate(&speed_video(1e-310)).is_err());

    let both: Operation<TimeMarkers> = Operation::Speed {
        input: "in.mp4".to_string(),
        speed: 1000.0,
    };
    assert!(ParameterValidator::validate(&both).is_err());

    let audio_only: Operation<TimeMarkers> = Operation::SpeedAudio {
        input: "in.mp3".to_string(),
        speed: 250.0,
    };
    assert!(ParameterValidator::validate(&audio_only).is_ok());
}

#[test]
fn test_dimensions_must_be_positive() {
    let scale: Operation<TimeMarkers> = Operation::Scale {
        input: "in.mp4".to_string(),
        width: -720,
    };
    assert_eq!(
        ParameterValidator::validate(&scale).unwrap_err().to_string(),
        "Width must be > 0"
    );
}

#[test]
fn test_markers_with_unit_suffixes() {
    assert!(ParameterValidator::validate_markers(&markers(Some("500ms"), Some("10s"))).is_ok());
    assert!(ParameterValidator::validate_markers(&markers(Some("10s"), Some("00:00:05"))).is_err());
}
