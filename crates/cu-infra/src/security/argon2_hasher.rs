use argon2::password_hash::{
    Error as PhcError, PasswordHash as PhcHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;

use cu_core::ports::{PasswordHashError, PasswordHasherPort};
use cu_core::security::SecretString;
use cu_core::user::PasswordHash;

/// Argon2id password hasher producing PHC strings.
///
/// Parameters are embedded in each hash, so records hashed with other
/// parameters still verify.
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    /// OWASP-recommended baseline (19 MiB, 2 passes, 1 lane).
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    pub fn with_params(
        mem_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordHashError> {
        let params = Params::new(mem_kib, iterations, parallelism, None)
            .map_err(|err| PasswordHashError::Hash(err.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherPort for Argon2PasswordHasher {
    fn hash(&self, password: &SecretString) -> Result<PasswordHash, PasswordHashError> {
        let mut salt_bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut salt_bytes);
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|err| PasswordHashError::Hash(err.to_string()))?;

        let phc = self
            .argon2()
            .hash_password(password.expose().as_bytes(), &salt)
            .map_err(|err| PasswordHashError::Hash(err.to_string()))?;

        Ok(PasswordHash::new(phc.to_string()))
    }

    fn verify(
        &self,
        password: &SecretString,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHashError> {
        let parsed = PhcHash::new(hash.as_str())
            .map_err(|err| PasswordHashError::MalformedHash(err.to_string()))?;

        match self
            .argon2()
            .verify_password(password.expose().as_bytes(), &parsed)
        {
            Ok(()) => Ok(true),
            Err(PhcError::Password) => Ok(false),
            Err(err) => Err(PasswordHashError::MalformedHash(err.to_string())),
        }
    }
}
