//! Token registry: source token ⇄ representative token.
//!
//! A source token is registered at most once. On the root side the
//! representative may still be unknown (pending) until the child confirms the
//! deployment; the reverse index only contains confirmed representatives.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::{Bound, Map};

use crate::error::TunnelError;

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 30;

#[cw_serde]
pub struct TokenMapping {
    /// Token on the root chain
    pub source_token: String,
    /// Token on the child chain, `None` while awaiting confirmation
    pub representative_token: Option<String>,
}

impl TokenMapping {
    /// Representative address, or the empty (null) address when pending.
    pub fn representative_or_null(&self) -> &str {
        self.representative_token.as_deref().unwrap_or_default()
    }
}

pub struct TokenRegistry<'a> {
    by_source: Map<'a, &'a str, TokenMapping>,
    by_representative: Map<'a, &'a str, String>,
}

impl<'a> TokenRegistry<'a> {
    pub const fn new(source_namespace: &'a str, representative_namespace: &'a str) -> Self {
        Self {
            by_source: Map::new(source_namespace),
            by_representative: Map::new(representative_namespace),
        }
    }

    /// Insert a mapping; fails if the source token already has one.
    pub fn register(
        &self,
        storage: &mut dyn Storage,
        source_token: &'a str,
        representative_token: Option<&'a str>,
    ) -> Result<TokenMapping, TunnelError> {
        if let Some(existing) = self.by_source.may_load(storage, source_token)? {
            return Err(TunnelError::TokenAlreadyMapped {
                source_token: existing.source_token.clone(),
                representative_token: existing.representative_or_null().to_string(),
            });
        }

        let mapping = TokenMapping {
            source_token: source_token.to_string(),
            representative_token: representative_token.map(str::to_string),
        };
        self.by_source.save(storage, source_token, &mapping)?;
        if let Some(representative) = representative_token {
            self.by_representative
                .save(storage, representative, &source_token.to_string())?;
        }
        Ok(mapping)
    }

    /// Fill the representative of a pending mapping.
    pub fn confirm(
        &self,
        storage: &mut dyn Storage,
        source_token: &'a str,
        representative_token: &'a str,
    ) -> Result<TokenMapping, TunnelError> {
        let mut mapping = self.lookup_strict(storage, source_token)?;
        if let Some(existing) = &mapping.representative_token {
            return Err(TunnelError::TokenAlreadyMapped {
                source_token: source_token.to_string(),
                representative_token: existing.clone(),
            });
        }

        mapping.representative_token = Some(representative_token.to_string());
        self.by_source.save(storage, source_token, &mapping)?;
        self.by_representative
            .save(storage, representative_token, &source_token.to_string())?;
        Ok(mapping)
    }

    pub fn lookup(
        &self,
        storage: &dyn Storage,
        source_token: &'a str,
    ) -> StdResult<Option<TokenMapping>> {
        self.by_source.may_load(storage, source_token)
    }

    pub fn lookup_strict(
        &self,
        storage: &dyn Storage,
        source_token: &'a str,
    ) -> Result<TokenMapping, TunnelError> {
        self.lookup(storage, source_token)?
            .ok_or_else(|| TunnelError::TokenNotMapped {
                token: source_token.to_string(),
            })
    }

    /// Reverse lookup by representative token.
    pub fn source_of(
        &self,
        storage: &dyn Storage,
        representative_token: &'a str,
    ) -> Result<String, TunnelError> {
        self.by_representative
            .may_load(storage, representative_token)?
            .ok_or_else(|| TunnelError::TokenNotMapped {
                token: representative_token.to_string(),
            })
    }

    pub fn is_mapped(&self, storage: &dyn Storage, source_token: &'a str) -> bool {
        self.by_source.has(storage, source_token)
    }

    pub fn range(
        &self,
        storage: &dyn Storage,
        start_after: Option<&'a str>,
        limit: Option<u32>,
    ) -> StdResult<Vec<TokenMapping>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
        let start = start_after.map(Bound::exclusive);

        self.by_source
            .range(storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| item.map(|(_, mapping)| mapping))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    const REGISTRY: TokenRegistry = TokenRegistry::new("mappings", "mappings_rev");

    #[test]
    fn test_register_and_lookup() {
        let mut storage = MockStorage::new();
        REGISTRY
            .register(&mut storage, "root_token", Some("child_token"))
            .unwrap();

        let mapping = REGISTRY.lookup_strict(&storage, "root_token").unwrap();
        assert_eq!(mapping.representative_token.as_deref(), Some("child_token"));
        assert_eq!(
            REGISTRY.source_of(&storage, "child_token").unwrap(),
            "root_token"
        );
    }

    #[test]
    fn test_second_registration_fails() {
        let mut storage = MockStorage::new();
        REGISTRY
            .register(&mut storage, "root_token", Some("child_token"))
            .unwrap();

        let err = REGISTRY
            .register(&mut storage, "root_token", Some("other_token"))
            .unwrap_err();
        assert_eq!(
            err,
            TunnelError::TokenAlreadyMapped {
                source_token: "root_token".to_string(),
                representative_token: "child_token".to_string(),
            }
        );
        // the first entry is untouched
        assert_eq!(
            REGISTRY.source_of(&storage, "other_token").unwrap_err(),
            TunnelError::TokenNotMapped {
                token: "other_token".to_string()
            }
        );
    }

    #[test]
    fn test_pending_then_confirm() {
        let mut storage = MockStorage::new();
        let pending = REGISTRY.register(&mut storage, "root_token", None).unwrap();
        assert_eq!(pending.representative_or_null(), "");
        assert!(REGISTRY.source_of(&storage, "child_token").is_err());

        REGISTRY
            .confirm(&mut storage, "root_token", "child_token")
            .unwrap();
        assert_eq!(
            REGISTRY.source_of(&storage, "child_token").unwrap(),
            "root_token"
        );

        let err = REGISTRY
            .confirm(&mut storage, "root_token", "another")
            .unwrap_err();
        assert!(matches!(err, TunnelError::TokenAlreadyMapped { .. }));
    }

    #[test]
    fn test_confirm_unknown_source() {
        let mut storage = MockStorage::new();
        assert_eq!(
            REGISTRY
                .confirm(&mut storage, "root_token", "child_token")
                .unwrap_err(),
            TunnelError::TokenNotMapped {
                token: "root_token".to_string()
            }
        );
    }

    #[test]
    fn test_range_paginates() {
        let mut storage = MockStorage::new();
        for i in 0..5 {
            let source = format!("token{}", i);
            REGISTRY.register(&mut storage, &source, None).unwrap();
        }

        let first = REGISTRY.range(&storage, None, Some(2)).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[1].source_token, "token1");

        let rest = REGISTRY.range(&storage, Some("token1"), None).unwrap();
        assert_eq!(rest.len(), 3);
        assert_eq!(rest[0].source_token, "token2");
    }
}
