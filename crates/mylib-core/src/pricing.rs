//! European option pricing under Black-Scholes.

use tracing::instrument;

use crate::error::{Error, Result};

/// Day count convention: calendar days over a 365-day year
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Complementary error function.
///
/// Chebyshev fit with fractional error below 1.2e-7 everywhere
/// (Numerical Recipes `erfcc`).
pub fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -z * z - 1.26551223
        + t * (1.00002368
            + t * (0.37409196
                + t * (0.09678418
                    + t * (-0.18628806
                        + t * (0.27886807
                            + t * (-1.13520398
                                + t * (1.48851587 + t * (-0.82215223 + t * 0.17087277))))))));
    let ans = t * poly.exp();
    if x >= 0.0 {
        ans
    } else {
        2.0 - ans
    }
}

/// Standard normal cumulative distribution function.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

fn require(name: &'static str, value: f64, ok: bool, reason: &str) -> Result<f64> {
    if value.is_nan() || !ok {
        return Err(Error::invalid(name, reason));
    }
    Ok(value)
}

/// Price of a European call.
///
/// `days` is the time to expiry in calendar days. At or past expiry the
/// intrinsic value is returned; with zero volatility the payoff on the
/// forward is discounted back.
#[instrument(level = "debug")]
pub fn european_call_price(spot: f64, strike: f64, rate: f64, vol: f64, days: f64) -> Result<f64> {
    let spot = require("spot", spot, spot > 0.0, "must be positive")?;
    let strike = require("strike", strike, strike > 0.0, "must be positive")?;
    let rate = require("rate", rate, rate.is_finite(), "must be finite")?;
    let vol = require("vol", vol, vol >= 0.0 && vol.is_finite(), "must be finite and not negative")?;
    let days = require("days", days, !days.is_infinite(), "must be finite")?;

    if days <= 0.0 {
        return Ok((spot - strike).max(0.0));
    }

    let t = days / DAYS_PER_YEAR;
    let discount = (-rate * t).exp();
    if vol == 0.0 {
        return Ok((spot - strike * discount).max(0.0));
    }

    let sqrt_t = t.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * t) / (vol * sqrt_t);
    let d2 = d1 - vol * sqrt_t;
    Ok(spot * norm_cdf(d1) - strike * discount * norm_cdf(d2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_norm_cdf_reference_points() {
        assert!(close(norm_cdf(0.0), 0.5, 1e-7));
        assert!(close(norm_cdf(1.96), 0.9750021048517795, 1e-6));
        assert!(close(norm_cdf(-1.0), 0.15865525393145707, 1e-6));
    }

    #[test]
    fn test_at_the_money_thirty_days() {
        let price = european_call_price(100.0, 100.0, 0.01, 0.2, 30.0).unwrap();
        assert!(close(price, 2.3275249119277177, 1e-4), "price = {price}");
    }

    #[test]
    fn test_in_the_money_half_year() {
        let price = european_call_price(110.0, 100.0, 0.05, 0.3, 182.5).unwrap();
        assert!(close(price, 16.36545110836282, 1e-4), "price = {price}");
    }

    #[test]
    fn test_expired_option_is_intrinsic() {
        assert_eq!(european_call_price(120.0, 100.0, 0.01, 0.2, 0.0).unwrap(), 20.0);
        assert_eq!(european_call_price(80.0, 100.0, 0.01, 0.2, -5.0).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_volatility_discounts_forward() {
        let price = european_call_price(100.0, 100.0, 0.05, 0.0, 365.0).unwrap();
        assert!(close(price, 100.0 - 100.0 * (-0.05f64).exp(), 1e-12));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            european_call_price(0.0, 100.0, 0.01, 0.2, 30.0),
            Err(Error::InvalidArgument { name: "spot", .. })
        ));
        assert!(matches!(
            european_call_price(100.0, 100.0, 0.01, -0.2, 30.0),
            Err(Error::InvalidArgument { name: "vol", .. })
        ));
        assert!(matches!(
            european_call_price(100.0, f64::NAN, 0.01, 0.2, 30.0),
            Err(Error::InvalidArgument { name: "strike", .. })
        ));
    }
}
