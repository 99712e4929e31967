// Time range resolver - Fills in missing start/end markers from the probed duration

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::model::{MediaDuration, Operation, TimeMarkers, TimeRange};
use crate::error::{FfShortError, FfShortResult};
use crate::ports::ProbePort;

/// Resolves effective time ranges for time-range-aware operations
pub struct TimeRangeResolver {
    probe_port: Arc<dyn ProbePort>,
}

impl TimeRangeResolver {
    pub fn new(probe_port: Arc<dyn ProbePort>) -> Self {
        Self { probe_port }
    }

    /// Whole-file bounds of `file_path`. Fails if no duration can be read.
    pub async fn media_duration(&self, file_path: &str) -> FfShortResult<MediaDuration> {
        let report = self.probe_port.probe(file_path).await?;
        let seconds = report
            .duration_seconds()
            .ok_or_else(|| FfShortError::probe(file_path, "no duration in stream or format info"))?;

        debug!("Probed duration of {}: {}s", file_path, seconds);
        Ok(MediaDuration::from_seconds(seconds))
    }

    /// Resolve `markers` against `file_path`.
    ///
    /// The file is always probed, even when both markers are supplied, so a
    /// missing or unreadable input fails here rather than inside ffmpeg.
    /// Supplied markers are returned unchanged.
    pub async fn resolve(&self, file_path: &str, markers: &TimeMarkers) -> FfShortResult<TimeRange> {
        let duration = self.media_duration(file_path).await?;
        let range = duration.apply(markers);
        info!("Resolved time range for {}: {}", file_path, range);
        Ok(range)
    }

    /// Replace the markers of a time-range-aware operation with a resolved
    /// range. Other operations pass through without probing.
    pub async fn resolve_operation(
        &self,
        operation: Operation<TimeMarkers>,
    ) -> FfShortResult<Operation<TimeRange>> {
        let resolved = match operation {
            Operation::Clip { input, range } => {
                let range = self.resolve(&input, &range).await?;
                Operation::Clip { input, range }
            }
            Operation::ExtractAudio { input, range } => {
                let range = self.resolve(&input, &range).await?;
                Operation::ExtractAudio { input, range }
            }
            Operation::RemoveAudio { input, range } => {
                let range = self.resolve(&input, &range).await?;
                Operation::RemoveAudio { input, range }
            }
            Operation::ToMp4 { input } => Operation::ToMp4 { input },
            Operation::ImageToVideo { image, audio } => Operation::ImageToVideo { image, audio },
            Operation::AudioToVideo { audio, video } => Operation::AudioToVideo { audio, video },
            Operation::Loop { input, loops } => Operation::Loop { input, loops },
            Operation::Reverse { input } => Operation::Reverse { input },
            Operation::Scale { input, width } => Operation::Scale { input, width },
            Operation::Resize {
                input,
                width,
                height,
            } => Operation::Resize {
                input,
                width,
                height,
            },
            Operation::SetFps { input, fps } => Operation::SetFps { input, fps },
            Operation::Speed { input, speed } => Operation::Speed { input, speed },
            Operation::SpeedVideo { input, speed } => Operation::SpeedVideo { input, speed },
            Operation::SpeedAudio { input, speed } => Operation::SpeedAudio { input, speed },
            Operation::Grayscale { input } => Operation::Grayscale { input },
            Operation::Invert { input } => Operation::Invert { input },
            Operation::Contrast { input } => Operation::Contrast { input },
        };
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ProbeFormat, ProbeReport, ProbeStream};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Prober returning a fixed report and counting calls
    struct FakeProbe {
        report: Option<ProbeReport>,
        calls: AtomicUsize,
    }

    impl FakeProbe {
        fn with_stream_duration(duration: &str) -> Self {
            Self {
                report: Some(ProbeReport {
                    streams: vec![ProbeStream {
                        codec_type: Some("video".to_string()),
                        duration: Some(duration.to_string()),
                    }],
                    format: ProbeFormat::default(),
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                report: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ProbePort for FakeProbe {
        async fn probe(&self, file_path: &str) -> FfShortResult<ProbeReport> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.report
                .clone()
                .ok_or_else(|| FfShortError::probe(file_path, "No such file or directory"))
        }
    }

    fn markers(from: Option<&str>, to: Option<&str>) -> TimeMarkers {
        TimeMarkers::new(from.map(str::to_string), to.map(str::to_string))
    }

    #[tokio::test]
    async fn test_whole_file_default() {
        let resolver = TimeRangeResolver::new(Arc::new(FakeProbe::with_stream_duration("125.0")));
        let range = resolver.resolve("in.mp4", &markers(None, None)).await.unwrap();
        assert_eq!(range, TimeRange::new("00:00:00", "00:02:05"));
    }

    #[tokio::test]
    async fn test_explicit_markers_returned_unchanged() {
        let probe = Arc::new(FakeProbe::with_stream_duration("125.0"));
        let resolver = TimeRangeResolver::new(probe.clone());
        let range = resolver
            .resolve("in.mp4", &markers(Some("00:00:05"), Some("1:10")))
            .await
            .unwrap();

        assert_eq!(range, TimeRange::new("00:00:05", "1:10"));
        // Probing happens regardless of supplied markers
        assert_eq!(probe.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_partial_markers() {
        let resolver = TimeRangeResolver::new(Arc::new(FakeProbe::with_stream_duration("3725.4")));

        let range = resolver.resolve("in.mp4", &markers(Some("00:10:00"), None)).await.unwrap();
        assert_eq!(range, TimeRange::new("00:10:00", "01:02:05"));

        let range = resolver.resolve("in.mp4", &markers(None, Some("00:00:30"))).await.unwrap();
        assert_eq!(range, TimeRange::new("00:00:00", "00:00:30"));
    }

    #[tokio::test]
    async fn test_probe_failure_propagates() {
        let resolver = TimeRangeResolver::new(Arc::new(FakeProbe::failing()));
        let err = resolver.resolve("missing.mp4", &markers(None, None)).await.unwrap_err();
        assert!(matches!(err, FfShortError::Probe { .. }));
    }

    #[tokio::test]
    async fn test_unavailable_duration_is_a_probe_error() {
        let resolver = TimeRangeResolver::new(Arc::new(FakeProbe::with_stream_duration("N/A")));
        let err = resolver.media_duration("stream.ts").await.unwrap_err();
        assert!(err.to_string().contains("no duration"));
    }

    #[tokio::test]
    async fn test_resolve_operation_skips_probe_for_plain_operations() {
        let probe = Arc::new(FakeProbe::failing());
        let resolver = TimeRangeResolver::new(probe.clone());

        let operation = resolver
            .resolve_operation(Operation::Grayscale {
                input: "in.mp4".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            operation,
            Operation::Grayscale {
                input: "in.mp4".to_string()
            }
        );
        assert_eq!(probe.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_resolve_operation_fills_range() {
        let resolver = TimeRangeResolver::new(Arc::new(FakeProbe::with_stream_duration("10")));
        let operation = resolver
            .resolve_operation(Operation::ExtractAudio {
                input: "in.mp4".to_string(),
                range: markers(Some("00:00:02"), None),
            })
            .await
            .unwrap();

        assert_eq!(
            operation.range(),
            Some(&TimeRange::new("00:00:02", "00:00:10"))
        );
    }
}
