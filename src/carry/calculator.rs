//! Carry yield calculation

use crate::{
    carry::SupplyRateSource,
    errors::{CarryError, CarryResult},
};

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Net funding cost together with the supply rate it was netted against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetBorrow {
    pub supply_rate: f64,
    pub rate: f64,
}

/// Redemption premium per cycle: `redemption_rate / spot_price`.
pub fn calc_arb(redemption_rate: f64, spot_price: f64) -> CarryResult<f64> {
    if !(spot_price > 0.0 && spot_price.is_finite()) {
        return Err(CarryError::invalid_arb(format!(
            "spot price must be positive and finite, got {}",
            spot_price
        )));
    }

    Ok(redemption_rate / spot_price)
}

/// Compounds the per-cycle ratio over a year of redemption cycles, as a percent.
pub fn calc_annualized_arb(arb_ratio: f64, days_to_redeem: f64) -> CarryResult<f64> {
    if !(days_to_redeem > 0.0 && days_to_redeem.is_finite()) {
        return Err(CarryError::invalid_arb(format!(
            "redemption period must be positive, got {} days",
            days_to_redeem
        )));
    }
    // A negative base under a fractional exponent has no real value.
    if !(arb_ratio >= 0.0 && arb_ratio.is_finite()) {
        return Err(CarryError::invalid_arb(format!(
            "arb ratio must be non-negative and finite, got {}",
            arb_ratio
        )));
    }

    let annualized = (arb_ratio.powf(DAYS_PER_YEAR / days_to_redeem) - 1.0) * 100.0;
    if !annualized.is_finite() {
        return Err(CarryError::invalid_arb(format!(
            "annualizing {} over {} days overflows",
            arb_ratio, days_to_redeem
        )));
    }

    Ok(annualized)
}

/// Borrow cost scaled by the collateral ratio, net of the freshly read supply rate.
pub async fn calc_net_borrow_rate<S>(
    borrow_rate: f64,
    collateral_ratio: f64,
    supply: &S,
) -> CarryResult<NetBorrow>
where
    S: SupplyRateSource,
{
    let supply_rate = supply.supply_rate().await?;

    Ok(NetBorrow {
        supply_rate,
        rate: borrow_rate * collateral_ratio - supply_rate,
    })
}

pub fn calc_net_delta_neutral(annualized_arb: f64, collateral_ratio: f64, net_borrow_rate: f64) -> f64 {
    annualized_arb * collateral_ratio - net_borrow_rate
}
