#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
}

impl JwtConfig {
    /// HS256 needs at least 32 bytes of key material.
    pub const MIN_SECRET_LEN: usize = 32;
    pub const DEFAULT_ISSUER: &'static str = "portfolio-api";
    /// Admin sessions last exactly one day.
    pub const TOKEN_TTL_SECONDS: i64 = 86_400;
}
