//! Standard normal distribution functions and truncated-Gaussian corrections
//!
//! `v`/`w` correct a team's mean and variance after a decisive comparison,
//! `vt`/`wt` after a declared tie. All fallback branches are explicit so that
//! extreme skill gaps never produce NaN.

use std::f64::consts::{PI, SQRT_2};

/// Smallest positive subnormal `f64`
const SMALLEST_POSITIVE: f64 = 5e-324;

/// Tie-window width below which `vt` switches to its linear form
const TIE_WINDOW_FLOOR: f64 = 1e-5;

const ERX: f64 = 8.45062911510467529297e-01;
const EFX: f64 = 1.28379167095512586316e-01;

const PP: [f64; 5] = [
    1.28379167095512558561e-01,
    -3.25042107247001499370e-01,
    -2.84817495755985104766e-02,
    -5.77027029648944159157e-03,
    -2.37630166566501626084e-05,
];
const QQ: [f64; 5] = [
    3.97917223959155352819e-01,
    6.50222499887672944485e-02,
    5.08130628187576562776e-03,
    1.32494738004321644526e-04,
    -3.96022827877536812320e-06,
];
const PA: [f64; 7] = [
    -2.36211856075265944077e-03,
    4.14856118683748331666e-01,
    -3.72207876035701323847e-01,
    3.18346619901161753674e-01,
    -1.10894694282396677476e-01,
    3.54783043256182359371e-02,
    -2.16637559486879084300e-03,
];
const QA: [f64; 6] = [
    1.06420880400844228286e-01,
    5.40397917702171048937e-01,
    7.18286544141962662868e-02,
    1.26171219808761642112e-01,
    1.36370839120290507362e-02,
    1.19844998467991074170e-02,
];
const RA: [f64; 8] = [
    -9.86494403484714822705e-03,
    -6.93858572707181764372e-01,
    -1.05586262253232909814e+01,
    -6.23753324503260060396e+01,
    -1.62396669462573470355e+02,
    -1.84605092906711035994e+02,
    -8.12874355063065934246e+01,
    -9.81432934416914548592e+00,
];
const SA: [f64; 8] = [
    1.96512716674392571292e+01,
    1.37657754143519042600e+02,
    4.34565877475229228821e+02,
    6.45387271733267880336e+02,
    4.29008140027567833386e+02,
    1.08635005541779435134e+02,
    6.57024977031928170135e+00,
    -6.04244152148580987438e-02,
];
const RB: [f64; 7] = [
    -9.86494292470009928597e-03,
    -7.99283237680523006574e-01,
    -1.77579549177547519889e+01,
    -1.60636384855821916062e+02,
    -6.37566443368389627722e+02,
    -1.02509513161107724954e+03,
    -4.83519191608651397019e+02,
];
const SB: [f64; 7] = [
    3.03380607434824582924e+01,
    3.25792512996573918826e+02,
    1.53672958608443695994e+03,
    3.19985821950859553908e+03,
    2.55305040643316442583e+03,
    4.74528541206955367215e+02,
    -2.24409524465858183362e+01,
];

/// Evaluates `c[0] + c[1]·z + c[2]·z² + …`
fn polynomial(coefficients: &[f64], z: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * z + c)
}

/// Evaluates `1 + c[0]·z + c[1]·z² + …`
fn unit_polynomial(coefficients: &[f64], z: f64) -> f64 {
    1.0 + z * polynomial(coefficients, z)
}

/// Error function, accurate to within one ulp over the whole real line.
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return x.signum();
    }

    let negative = x < 0.0;
    let ax = x.abs();

    if ax < 0.84375 {
        if ax < 2f64.powi(-28) {
            return x + EFX * x;
        }
        let z = x * x;
        let y = polynomial(&PP, z) / unit_polynomial(&QQ, z);
        return x + x * y;
    }

    if ax < 1.25 {
        let s = ax - 1.0;
        let ratio = polynomial(&PA, s) / unit_polynomial(&QA, s);
        return if negative { -ERX - ratio } else { ERX + ratio };
    }

    if ax >= 6.0 {
        return if negative { -1.0 } else { 1.0 };
    }

    let s = 1.0 / (ax * ax);
    let (r, q) = if ax < 1.0 / 0.35 {
        (polynomial(&RA, s), unit_polynomial(&SA, s))
    } else {
        (polynomial(&RB, s), unit_polynomial(&SB, s))
    };

    // Drop the low word so z*z is exact.
    let z = f64::from_bits(ax.to_bits() & 0xffff_ffff_0000_0000);
    let tail = (-z * z - 0.5625).exp() * ((z - ax) * (z + ax) + r / q).exp() / ax;

    if negative {
        tail - 1.0
    } else {
        1.0 - tail
    }
}

/// Standard normal cumulative distribution function Φ(x).
pub fn phi_major(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2))
}

/// Inverse of the standard normal CDF (Wichura's AS241, PPND16).
///
/// Returns `-inf`/`inf` at exactly 0 and 1 and NaN outside `[0, 1]`.
pub fn phi_major_inv(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    let q = p - 0.5;
    if q.abs() <= 0.425 {
        let r = 0.180625 - q * q;
        let num = (((((((2.5090809287301227e+3 * r + 3.3430575583588128e+4) * r
            + 6.7265770927008709e+4)
            * r
            + 4.5921953931549872e+4)
            * r
            + 1.3731693765509461e+4)
            * r
            + 1.9715909503065514e+3)
            * r
            + 1.3314166789178437e+2)
            * r
            + 3.3871328727963666e+0)
            * q;
        let den = ((((((5.2264952788528546e+3 * r + 2.8729085735721943e+4) * r
            + 3.9307895800092710e+4)
            * r
            + 2.1213794301586599e+4)
            * r
            + 5.3941960214247511e+3)
            * r
            + 6.8718700749205790e+2)
            * r
            + 4.2313330701600911e+1)
            * r
            + 1.0;
        return num / den;
    }

    let tail = if q > 0.0 { 1.0 - p } else { p };
    let mut r = (-tail.ln()).sqrt();

    let (num, den) = if r <= 5.0 {
        r -= 1.6;
        let num = ((((((7.7454501427834141e-4 * r + 2.2723844989269185e-2) * r
            + 2.4178072517745061e-1)
            * r
            + 1.2704582524523684e+0)
            * r
            + 3.6478483247632046e+0)
            * r
            + 5.7694972214606914e+0)
            * r
            + 4.6303378461565453e+0)
            * r
            + 1.4234371107496838e+0;
        let den = ((((((1.0507500716444168e-9 * r + 5.4759380849953445e-4) * r
            + 1.5198666563616457e-2)
            * r
            + 1.4810397642748007e-1)
            * r
            + 6.8976733498510000e-1)
            * r
            + 1.6763848301838038e+0)
            * r
            + 2.0531916266377588e+0)
            * r
            + 1.0;
        (num, den)
    } else {
        r -= 5.0;
        let num = ((((((2.0103343992922881e-7 * r + 2.7115555687434876e-5) * r
            + 1.2426609473880784e-3)
            * r
            + 2.6532189526576123e-2)
            * r
            + 2.9656057182850489e-1)
            * r
            + 1.7848265399172911e+0)
            * r
            + 5.4637849111641144e+0)
            * r
            + 6.6579046435011038e+0;
        let den = ((((((2.0442631033899398e-15 * r + 1.4215117583164459e-7) * r
            + 1.8463183175100547e-5)
            * r
            + 7.8686913114561326e-4)
            * r
            + 1.4875361290850615e-2)
            * r
            + 1.3692988092273581e-1)
            * r
            + 5.9983220655588794e-1)
            * r
            + 1.0;
        (num, den)
    };

    let x = num / den;
    if q < 0.0 {
        -x
    } else {
        x
    }
}

/// Standard normal probability density function φ(x).
pub fn phi_minor(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Mean correction for a win, `φ(x−t)/Φ(x−t)`.
pub fn v(x: f64, t: f64) -> f64 {
    let xt = x - t;
    let denominator = phi_major(xt);

    if denominator < SMALLEST_POSITIVE {
        return -xt;
    }
    phi_minor(xt) / denominator
}

/// Variance correction for a win, `v·(v + x − t)`.
pub fn w(x: f64, t: f64) -> f64 {
    let xt = x - t;
    let denominator = phi_major(xt);

    if denominator < SMALLEST_POSITIVE {
        return if x < 0.0 { 1.0 } else { 0.0 };
    }

    let v = v(x, t);
    v * (v + xt)
}

/// Mean correction for a draw inside the window `[-t, t]`.
pub fn vt(x: f64, t: f64) -> f64 {
    let xx = x.abs();
    let b = phi_major(t - xx) - phi_major(-t - xx);

    if b < TIE_WINDOW_FLOOR {
        return if x < 0.0 { -x - t } else { -x + t };
    }

    let a = phi_minor(-t - xx) - phi_minor(t - xx);
    if x < 0.0 {
        -a / b
    } else {
        a / b
    }
}

/// Variance correction for a draw inside the window `[-t, t]`.
pub fn wt(x: f64, t: f64) -> f64 {
    let xx = x.abs();
    let b = phi_major(t - xx) - phi_major(-t - xx);

    if b < SMALLEST_POSITIVE {
        return 1.0;
    }

    let numerator = (t - xx) * phi_minor(t - xx) + (t + xx) * phi_minor(-t - xx);
    let vt = vt(x, t);
    numerator / b + vt * vt
}
