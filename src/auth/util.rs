use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use std::str::FromStr;

pub fn parse_jwt_algorithms(jwt_algorithms: &str) -> anyhow::Result<Vec<Algorithm>> {
    jwt_algorithms
        .split(',')
        .map(|algorithm| {
            Algorithm::from_str(algorithm.trim())
                .map_err(|err| anyhow!("invalid jwt algorithm {algorithm:?}: {err}"))
        })
        .collect()
}

pub fn parse_jwt_key(jwt_algorithm: &Algorithm, jwt_key: &str) -> anyhow::Result<DecodingKey> {
    let jwt_key = jwt_key.as_bytes();

    let key = match jwt_algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
            DecodingKey::from_secret(jwt_key)
        }
        Algorithm::ES256 | Algorithm::ES384 => DecodingKey::from_ec_pem(jwt_key)
            .map_err(|err| anyhow!("invalid ec pem key: {err}"))?,
        Algorithm::RS256
        | Algorithm::RS384
        | Algorithm::RS512
        | Algorithm::PS256
        | Algorithm::PS384
        | Algorithm::PS512 => DecodingKey::from_rsa_pem(jwt_key)
            .map_err(|err| anyhow!("invalid rsa pem key: {err}"))?,
        Algorithm::EdDSA => DecodingKey::from_ed_pem(jwt_key)
            .map_err(|err| anyhow!("invalid ed pem key: {err}"))?,
    };

    Ok(key)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn algorithm_list_is_parsed_in_order() {
        let algorithms = parse_jwt_algorithms("HS256, HS512").unwrap();

        assert_eq!(algorithms, vec![Algorithm::HS256, Algorithm::HS512]);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert!(parse_jwt_algorithms("HS256,NotAnAlgorithm").is_err());
    }

    #[test]
    fn hmac_key_accepts_any_secret() {
        assert!(parse_jwt_key(&Algorithm::HS256, "some secret").is_ok());
    }

    #[test]
    fn eddsa_key_is_parsed_as_ed_pem() {
        let err = parse_jwt_key(&Algorithm::EdDSA, "not a pem").err().unwrap();

        assert!(err.to_string().contains("invalid ed pem key"));
    }
}
