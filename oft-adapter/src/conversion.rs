//! Local <-> shared decimal conversion.

use cosmwasm_std::Uint128;

use crate::error::ContractError;

/// `10^(local - shared)`; fails if the token is less precise than the shared
/// representation.
pub fn conversion_rate(local_decimals: u8, shared_decimals: u8) -> Result<Uint128, ContractError> {
    let exponent = local_decimals
        .checked_sub(shared_decimals)
        .ok_or(ContractError::InvalidLocalDecimals {
            local: local_decimals,
            shared: shared_decimals,
        })?;
    Uint128::new(10)
        .checked_pow(exponent as u32)
        .map_err(|_| ContractError::InvalidLocalDecimals {
            local: local_decimals,
            shared: shared_decimals,
        })
}

/// Drop everything below the shared precision.
pub fn remove_dust(amount: Uint128, rate: Uint128) -> Uint128 {
    amount / rate * rate
}

/// Amount in shared decimals, as carried by cross-chain messages.
pub fn to_shared(amount: Uint128, rate: Uint128) -> Result<u64, ContractError> {
    u64::try_from((amount / rate).u128())
        .map_err(|_| ContractError::SharedAmountOverflow { amount })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_rate() {
        assert_eq!(conversion_rate(18, 6).unwrap(), Uint128::new(1_000_000_000_000));
        assert_eq!(conversion_rate(6, 6).unwrap(), Uint128::one());
        assert_eq!(
            conversion_rate(4, 6).unwrap_err(),
            ContractError::InvalidLocalDecimals {
                local: 4,
                shared: 6
            }
        );
    }

    #[test]
    fn test_remove_dust() {
        let rate = conversion_rate(18, 6).unwrap();
        assert_eq!(remove_dust(Uint128::new(100), rate), Uint128::zero());
        assert_eq!(
            remove_dust(Uint128::new(1_000_000_000_001), rate),
            Uint128::new(1_000_000_000_000)
        );
        assert_eq!(remove_dust(Uint128::new(12), Uint128::one()), Uint128::new(12));
    }

    #[test]
    fn test_to_shared_overflow() {
        let rate = Uint128::one();
        assert_eq!(to_shared(Uint128::new(u64::MAX as u128), rate).unwrap(), u64::MAX);

        let too_big = Uint128::new(u64::MAX as u128 + 1);
        assert_eq!(
            to_shared(too_big, rate).unwrap_err(),
            ContractError::SharedAmountOverflow { amount: too_big }
        );
    }
}
