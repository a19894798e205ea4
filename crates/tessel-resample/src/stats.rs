// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// Statistics collected during one resample call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResampleStatistics {
    /// Number of workers that filled the output.
    pub used_workers: usize,
    /// Number of output points written.
    pub points_written: usize,
    /// Wall-clock duration of the call, allocation included.
    pub duration: std::time::Duration,
}

impl std::fmt::Display for ResampleStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Resample Statistics:")?;
        writeln!(f, "  Used Workers: {}", self.used_workers)?;
        writeln!(f, "  Points Written: {}", self.points_written)?;
        writeln!(
            f,
            "  Duration (secs): {:.3}",
            self.duration.as_secs_f64()
        )
    }
}

/// Builder for `ResampleStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResampleStatisticsBuilder {
    used_workers: usize,
    points_written: usize,
    duration: std::time::Duration,
}

impl Default for ResampleStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResampleStatisticsBuilder {
    #[inline]
    pub fn new() -> Self {
        Self {
            used_workers: 1,
            points_written: 0,
            duration: std::time::Duration::ZERO,
        }
    }

    #[inline]
    pub fn used_workers(mut self, used_workers: usize) -> Self {
        self.used_workers = used_workers;
        self
    }

    #[inline]
    pub fn points_written(mut self, points_written: usize) -> Self {
        self.points_written = points_written;
        self
    }

    #[inline]
    pub fn duration(mut self, duration: std::time::Duration) -> Self {
        self.duration = duration;
        self
    }

    #[inline]
    pub fn build(self) -> ResampleStatistics {
        ResampleStatistics {
            used_workers: self.used_workers,
            points_written: self.points_written,
            duration: self.duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ResampleStatistics, ResampleStatisticsBuilder};
    use std::time::Duration;

    #[test]
    fn test_builder_constructs_expected_struct() {
        let stats = ResampleStatisticsBuilder::new()
            .used_workers(6)
            .points_written(4096)
            .duration(Duration::from_millis(250))
            .build();

        assert_eq!(stats.used_workers, 6);
        assert_eq!(stats.points_written, 4096);
        assert_eq!(stats.duration, Duration::from_millis(250));
    }

    #[test]
    fn test_builder_defaults() {
        let stats = ResampleStatisticsBuilder::default().build();
        assert_eq!(stats.used_workers, 1);
        assert_eq!(stats.points_written, 0);
        assert_eq!(stats.duration, Duration::ZERO);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = ResampleStatistics {
            used_workers: 4,
            points_written: 307_200,
            duration: Duration::from_millis(1234),
        };

        let rendered = format!("{}", stats);

        assert!(rendered.contains("Resample Statistics:"), "missing header");
        assert!(rendered.contains("Used Workers: 4"), "missing used_workers");
        assert!(
            rendered.contains("Points Written: 307200"),
            "missing points_written"
        );
        assert!(
            rendered.contains("Duration (secs): 1.234"),
            "duration not formatted to 3 decimals"
        );
    }
}
