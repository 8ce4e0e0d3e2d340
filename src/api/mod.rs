pub mod compare;
pub mod favorites;
pub mod headers;
pub mod images;
pub mod outfit;
pub mod session;

pub use compare::{handle_colors, handle_compare, __path_handle_colors, __path_handle_compare};
pub use compare::{ColorInfo, ColorRequest, CompareRequest, CompareResponse};
pub use favorites::{
    handle_add_favorite, handle_delete_favorite, handle_list_favorites, FavoriteRequest,
    FavoritesResponse, __path_handle_add_favorite, __path_handle_delete_favorite,
    __path_handle_list_favorites,
};
pub use outfit::{handle_outfit, AccessoryVerdict, OutfitRequest, OutfitResponse, PairVerdict, __path_handle_outfit};
pub use session::{
    handle_create_session, handle_end_session, SessionResponse, __path_handle_create_session,
    __path_handle_end_session,
};
