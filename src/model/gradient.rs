//! Commit-age color gradient
//!
//! Maps author timestamps onto a fixed number of discrete age buckets and
//! each bucket onto an RGB background color, interpolated between a dark
//! "oldest" tone and a light "newest" tone.

use super::Annotation;

/// A plain RGB triple, independent of any UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Default number of age buckets
pub const DEFAULT_BUCKETS: u8 = 10;

/// Tone for the oldest bucket (dark blue)
pub const OLDEST_TONE: Rgb = Rgb::new(0x1d, 0x2f, 0x4f);

/// Tone for the newest bucket (light blue)
pub const NEWEST_TONE: Rgb = Rgb::new(0xa9, 0xc6, 0xf2);

/// Assigns age buckets and bucket colors to annotations.
///
/// Only strictly-positive timestamps participate: uncommitted lines
/// (`author_time == 0`) are excluded from the range and stay colorless.
#[derive(Debug, Clone)]
pub struct AgeGradient {
    buckets: u8,
    oldest: Rgb,
    newest: Rgb,
}

impl Default for AgeGradient {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKETS, OLDEST_TONE, NEWEST_TONE)
    }
}

impl AgeGradient {
    /// Create a gradient with `buckets` age classes between two endpoint tones.
    ///
    /// The bucket count is floored at 2 so the interpolation denominator
    /// stays positive.
    pub fn new(buckets: u8, oldest: Rgb, newest: Rgb) -> Self {
        Self {
            buckets: buckets.max(2),
            oldest,
            newest,
        }
    }

    pub fn bucket_count(&self) -> u8 {
        self.buckets
    }

    /// Assign a bucket to every committed annotation in place.
    pub fn assign(&self, annotations: &mut [Annotation]) {
        let Some((min_t, max_t)) = positive_range(annotations) else {
            return;
        };
        for annotation in annotations {
            if annotation.author_time > 0 {
                annotation.color_bucket = Some(self.bucket_for(annotation.author_time, min_t, max_t));
            }
        }
    }

    /// Bucket for a positive timestamp within the observed range.
    ///
    /// `bucket = floor(ratio * (N - 1)) + 1`, clamped to `[1, N]`; a
    /// degenerate range (all timestamps equal) maps everything to bucket N.
    pub fn bucket_for(&self, t: i64, min_t: i64, max_t: i64) -> u8 {
        let spread = self.buckets as f64 - 1.0;
        let ratio = if max_t == min_t {
            1.0
        } else {
            (t - min_t) as f64 / (max_t - min_t) as f64
        };
        let bucket = (ratio * spread).floor() as i64 + 1;
        bucket.clamp(1, i64::from(self.buckets)) as u8
    }

    /// Display color for a bucket, linearly interpolated per channel.
    pub fn color(&self, bucket: u8) -> Rgb {
        let bucket = bucket.clamp(1, self.buckets);
        let ratio = f64::from(bucket - 1) / f64::from(self.buckets - 1);
        Rgb::new(
            lerp(self.oldest.r, self.newest.r, ratio),
            lerp(self.oldest.g, self.newest.g, ratio),
            lerp(self.oldest.b, self.newest.b, ratio),
        )
    }
}

/// Min/max over strictly-positive timestamps, None when there are none.
fn positive_range(annotations: &[Annotation]) -> Option<(i64, i64)> {
    let mut range: Option<(i64, i64)> = None;
    for annotation in annotations {
        let t = annotation.author_time;
        if t <= 0 {
            continue;
        }
        range = Some(match range {
            Some((min_t, max_t)) => (min_t.min(t), max_t.max(t)),
            None => (t, t),
        });
    }
    range
}

fn lerp(from: u8, to: u8, ratio: f64) -> u8 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * ratio).round() as u8
}
