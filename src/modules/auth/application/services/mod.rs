pub mod login_admin;
pub mod resolve_admin;
pub mod seed_admin;

pub use login_admin::LoginAdminService;
pub use resolve_admin::ResolveAdminService;
pub use seed_admin::SeedAdminService;
