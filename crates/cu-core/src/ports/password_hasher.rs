use crate::ports::errors::PasswordHashError;
use crate::security::SecretString;
use crate::user::PasswordHash;

pub trait PasswordHasherPort: Send + Sync {
    /// Hash a password into a self-describing PHC string.
    fn hash(&self, password: &SecretString) -> Result<PasswordHash, PasswordHashError>;

    /// Check a password against a stored hash.
    ///
    /// Error semantics:
    /// - `Ok(false)`   : well-formed hash, wrong password
    /// - `MalformedHash`: the stored value cannot be parsed
    fn verify(
        &self,
        password: &SecretString,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHashError>;
}
