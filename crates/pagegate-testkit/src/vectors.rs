//! Token derivation vectors.
//!
//! Every vector pairs a (secret, page) input with the cookie name the
//! gate derives for it and one freshly issued token value. The checks
//! pin the derivation's shape and scoping: deterministic names, no
//! input leakage, values that verify only against their own secret.

use serde::{Deserialize, Serialize};

use pagegate_core::{token_key, PageId, SessionToken};

/// A single derivation vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenVector {
    pub name: String,

    // Inputs
    pub secret: String,
    pub page: u32,

    // Derived outputs
    pub cookie_name: String,
    pub token_value: String,
}

fn generate_vector(name: &str, secret: &str, page: u32) -> TokenVector {
    let page_id = PageId::new(page).expect("vector page ids are positive");
    TokenVector {
        name: name.to_string(),
        secret: secret.to_string(),
        page,
        cookie_name: token_key(secret, page_id),
        token_value: SessionToken::issue(secret).encode(),
    }
}

/// All derivation vectors.
pub fn all_vectors() -> Vec<TokenVector> {
    vec![
        generate_vector("simple", "swordfish", 42),
        generate_vector("same_secret_other_page", "swordfish", 43),
        generate_vector("other_secret_same_page", "tunafish", 42),
        generate_vector("single_char", "a", 1),
        generate_vector("spaces_inside", "correct horse battery", 7),
        generate_vector("unicode", "pässwörd", 100),
        generate_vector("large_page_id", "swordfish", u32::MAX),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use pagegate_core::verify_token;

    #[test]
    fn test_cookie_names_deterministic() {
        for vector in all_vectors() {
            let page = PageId::new(vector.page).unwrap();
            assert_eq!(
                vector.cookie_name,
                token_key(&vector.secret, page),
                "vector {}",
                vector.name
            );
        }
    }

    #[test]
    fn test_cookie_name_shape() {
        for vector in all_vectors() {
            assert!(vector.cookie_name.starts_with("pg_"), "vector {}", vector.name);
            assert_eq!(vector.cookie_name.len(), 35, "vector {}", vector.name);
            assert!(
                vector
                    .cookie_name
                    .chars()
                    .skip(3)
                    .all(|c| c.is_ascii_hexdigit()),
                "vector {}",
                vector.name
            );
        }
    }

    #[test]
    fn test_cookie_names_do_not_leak_inputs() {
        // Very short secrets can appear in hex output by chance; only
        // longer ones make a meaningful leak check.
        for vector in all_vectors() {
            if vector.secret.is_ascii() && vector.secret.len() >= 4 {
                assert!(!vector.cookie_name.contains(&vector.secret));
            }
        }
    }

    #[test]
    fn test_all_pairs_distinct() {
        let names: HashSet<String> = all_vectors().into_iter().map(|v| v.cookie_name).collect();
        assert_eq!(names.len(), all_vectors().len());
    }

    #[test]
    fn test_token_values_verify_only_their_own_secret() {
        let vectors = all_vectors();
        for vector in &vectors {
            assert!(
                verify_token(&vector.secret, &vector.token_value),
                "vector {}",
                vector.name
            );
        }

        // A token issued for one secret never verifies another.
        let simple = &vectors[0];
        assert!(!verify_token("tunafish", &simple.token_value));
    }

    #[test]
    fn test_vectors_serialize() {
        let json = serde_json::to_string_pretty(&all_vectors()).unwrap();
        let recovered: Vec<TokenVector> = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.len(), all_vectors().len());
    }
}
