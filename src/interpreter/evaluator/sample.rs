use crate::{ast::Expr, error::SampleError, interpreter::evaluator::core::Context};

/// Most points a single range may produce.
pub const MAX_SAMPLE_POINTS: usize = 1_000_000;

/// An evenly spaced, inclusive range of `x` values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    /// First sampled value.
    pub start: f64,
    /// Last value that may be sampled.
    pub end:   f64,
    /// Distance between consecutive points.
    pub step:  f64,
}

impl Default for SampleRange {
    /// `0.0..=2.0` in steps of `0.01`.
    fn default() -> Self {
        Self { start: 0.0,
               end:   2.0,
               step:  0.01, }
    }
}

impl SampleRange {
    /// Checks that the range can be walked.
    ///
    /// # Errors
    /// - `InvalidStep` if `step` is not a positive finite number.
    /// - `NonFiniteBound` if `start` or `end` is infinite or NaN.
    /// - `TooManyPoints` if the range spans [`MAX_SAMPLE_POINTS`] steps or more.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<(), SampleError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SampleError::InvalidStep { step: self.step });
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(SampleError::NonFiniteBound { start: self.start,
                                                     end:   self.end, });
        }
        let intervals = (self.end - self.start) / self.step;
        if intervals >= MAX_SAMPLE_POINTS as f64 {
            return Err(SampleError::TooManyPoints { intervals,
                                                    limit: MAX_SAMPLE_POINTS });
        }
        Ok(())
    }

    /// Iterates the points of the range.
    ///
    /// Points are computed as `start + i * step` so rounding does not
    /// accumulate. A point within a millionth of a step past `end` still
    /// counts, which keeps `0.0..=2.0` by `0.01` at 201 points. A range whose
    /// `end` is below `start` is empty, and so is a range that fails
    /// [`validate`](Self::validate).
    #[allow(clippy::cast_precision_loss)]
    pub fn points(&self) -> impl Iterator<Item = f64> + use<> {
        let Self { start, end, step } = *self;
        let valid = self.validate().is_ok();
        let limit = end + step * 1e-6;
        (0_u64..).take_while(move |_| valid)
                 .map(move |i| (i as f64).mul_add(step, start))
                 .take_while(move |x| *x <= limit)
    }
}

/// One evaluated point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Value bound to `x`.
    pub x: f64,
    /// The expression's value at `x`.
    pub y: f64,
}

/// Evaluates `expr` at every point of `range`.
///
/// An expression that never mentions `x` is evaluated once and its value
/// repeated at every point.
///
/// # Errors
/// Returns a `SampleError` if the range is rejected by
/// [`SampleRange::validate`]. Evaluation itself never fails.
///
/// # Example
/// ```
/// use exprwalk::{interpreter::evaluator::sample::{SampleRange, sample}, parse};
///
/// let expr = parse("x*2").unwrap();
/// let samples = sample(&expr, SampleRange::default()).unwrap();
/// assert_eq!(samples.len(), 201);
/// assert_eq!(samples[0].y, 0.0);
/// assert!((samples[200].y - 4.0).abs() < 1e-9);
/// ```
pub fn sample(expr: &Expr, range: SampleRange) -> Result<Vec<Sample>, SampleError> {
    range.validate()?;

    let constant = (!expr.depends_on_variable()).then(|| expr.evaluate(range.start));

    let samples: Vec<Sample> = range.points()
                                    .map(|x| Sample { x,
                                                      y: constant.unwrap_or_else(|| Context::new(x).eval_expr(expr)) })
                                    .inspect(|s| tracing::trace!(x = s.x, y = s.y, "sampled"))
                                    .collect();

    tracing::debug!(count = samples.len(), "sampled expression");
    Ok(samples)
}
