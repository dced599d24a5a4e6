//! Standard Hough transform restricted to an angular window.
//!
//! Every nonzero pixel of the edge map votes once per discrete angle in the
//! window. The accumulator is padded by one bin on each side so peak tests
//! never index out of range. A bin is reported when its votes exceed the
//! threshold and it dominates its rho and theta neighbours: strictly on the
//! lower side, non-strictly on the upper side, so a plateau yields exactly one
//! line (the lowest bin).
//!
//! The rho axis spans `±(width + height)` so every line through the image
//! fits regardless of angle.

use image::GrayImage;

/// A detected line in normal form: `x·cos(theta) + y·sin(theta) = rho`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCandidate {
    /// Signed distance from the origin in pixels.
    pub rho: f64,
    /// Angle of the line normal in radians.
    pub theta: f64,
    /// Accumulator votes supporting this line.
    pub votes: u32,
}

/// Parameters of one line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoughParams {
    /// Distance resolution in pixels.
    pub rho_step: f64,
    /// Angle resolution in radians.
    pub theta_step: f64,
    /// A bin needs strictly more votes than this to be reported.
    pub threshold: u32,
    /// First angle of the window (inclusive).
    pub min_theta: f64,
    /// End of the window (exclusive).
    pub max_theta: f64,
}

/// Number of discrete angles in the half-open window `[min, max)`.
///
/// A zero-width window still samples `min` once.
pub fn angle_count(min_theta: f64, max_theta: f64, theta_step: f64) -> usize {
    let span = max_theta - min_theta;
    if span <= 0.0 {
        return 1;
    }
    // Shave off float noise so that e.g. (π/2)/(π/2) does not round up to 2.
    (((span / theta_step) - 1e-9).ceil() as usize).max(1)
}

/// Upper bound on accumulator plus trig table memory for one search.
pub const MAX_ACCUMULATOR_BYTES: u64 = 300_000_000;

/// Bytes held by the padded accumulator and the cos/sin tables, or `None`
/// on overflow.
fn working_set_bytes(num_angle: usize, num_rho: usize) -> Option<u64> {
    let cells = (num_angle as u64)
        .checked_add(2)?
        .checked_mul((num_rho as u64).checked_add(2)?)?;
    let accum = cells.checked_mul(std::mem::size_of::<u32>() as u64)?;
    let tables = (num_angle as u64).checked_mul(2 * std::mem::size_of::<f64>() as u64)?;
    accum.checked_add(tables)
}

/// Search `edges` for straight lines.
///
/// Lines are returned strongest first; ties keep accumulator order
/// (increasing angle, then increasing rho).
pub fn hough_lines(edges: &GrayImage, params: &HoughParams) -> Vec<LineCandidate> {
    let (w, h) = edges.dimensions();
    let valid = params.rho_step.is_finite()
        && params.rho_step > 0.0
        && params.theta_step.is_finite()
        && params.theta_step > 0.0
        && params.min_theta.is_finite()
        && params.max_theta.is_finite();
    if !valid {
        log::warn!("rejecting line search parameters {:?}", params);
        return Vec::new();
    }
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let num_angle = angle_count(params.min_theta, params.max_theta, params.theta_step);
    let num_rho = ((((w as u64 + h as u64) * 2 + 1) as f64 / params.rho_step).round() as usize).max(1);
    let Some(bytes) = working_set_bytes(num_angle, num_rho).filter(|&b| b <= MAX_ACCUMULATOR_BYTES) else {
        log::warn!(
            "line search needs {} angle(s) x {} rho bins, over the {} byte limit; skipping",
            num_angle,
            num_rho,
            MAX_ACCUMULATOR_BYTES
        );
        return Vec::new();
    };
    log::trace!("line search working set: {} bytes", bytes);
    let rho_offset = ((num_rho - 1) / 2) as i64;
    let irho = 1.0 / params.rho_step;

    let (cos_table, sin_table): (Vec<f64>, Vec<f64>) = (0..num_angle)
        .map(|n| {
            let angle = params.min_theta + n as f64 * params.theta_step;
            (angle.cos() * irho, angle.sin() * irho)
        })
        .unzip();

    let stride = num_rho + 2;
    let mut accum = vec![0u32; (num_angle + 2) * stride];

    for (x, y, px) in edges.enumerate_pixels() {
        if px.0[0] == 0 {
            continue;
        }
        for n in 0..num_angle {
            let r = (x as f64 * cos_table[n] + y as f64 * sin_table[n]).round() as i64 + rho_offset;
            if r < 0 || r >= num_rho as i64 {
                continue;
            }
            accum[(n + 1) * stride + r as usize + 1] += 1;
        }
    }

    let mut peaks: Vec<(usize, usize, usize, u32)> = Vec::new();
    for r in 0..num_rho {
        for n in 0..num_angle {
            let base = (n + 1) * stride + r + 1;
            let votes = accum[base];
            if votes > params.threshold
                && votes > accum[base - 1]
                && votes >= accum[base + 1]
                && votes > accum[base - stride]
                && votes >= accum[base + stride]
            {
                peaks.push((base, n, r, votes));
            }
        }
    }
    peaks.sort_by(|a, b| b.3.cmp(&a.3).then(a.0.cmp(&b.0)));

    log::trace!(
        "line search over {} angle(s) x {} rho bins found {} peak(s)",
        num_angle,
        num_rho,
        peaks.len()
    );

    let half = (num_rho - 1) as f64 * 0.5;
    peaks
        .into_iter()
        .map(|(_, n, r, votes)| LineCandidate {
            rho: (r as f64 - half) * params.rho_step,
            theta: params.min_theta + n as f64 * params.theta_step,
            votes,
        })
        .collect()
}
