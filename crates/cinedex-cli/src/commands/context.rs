use color_eyre::eyre::{eyre, Result};
use movie_catalog_api::TmdbClient;
use movie_catalog_config::{resolve_api_key, Config, CredentialStore, PathManager, API_KEY_ENV};
use movie_catalog_core::{Wishlist, WishlistStorage};

/// Everything a catalog-facing command needs: configuration, the catalog
/// client, and the session wishlist. Built once at command start and passed
/// down explicitly; ownership of the wishlist lives here, not in a global.
pub struct AppContext {
    pub config: Config,
    pub catalog: TmdbClient,
    pub wishlist: Wishlist,
}

impl AppContext {
    pub fn init() -> Result<Self> {
        let paths = PathManager::default();
        paths.ensure_directories().map_err(|e| eyre!("{}", e))?;

        let config = Config::load_or_default(&paths.config_file()).map_err(|e| eyre!("{}", e))?;
        config.validate().map_err(|e| eyre!("Invalid configuration: {}", e))?;

        let mut credentials = CredentialStore::new(paths.credentials_file());
        credentials.load().map_err(|e| eyre!("{}", e))?;
        let api_key = resolve_api_key(&credentials).ok_or_else(|| {
            eyre!(
                "No catalog API key configured. Run 'cinedex config tmdb' or set {}.",
                API_KEY_ENV
            )
        })?;

        let catalog = TmdbClient::new(&config.tmdb, api_key);
        let wishlist = Wishlist::load(WishlistStorage::new(paths.wishlist_file()));

        Ok(Self {
            config,
            catalog,
            wishlist,
        })
    }
}
