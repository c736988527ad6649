use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{LeaderboardPlayer, LeaderboardRating};
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "chess-facade",
        description = "Flattened views over the lichess player and rating APIs"
    ),
    paths(
        routes::top_ten,
        routes::user,
        routes::enriched_user,
        routes::top_player_history,
    ),
    components(schemas(LeaderboardPlayer, LeaderboardRating, ErrorResponse)),
    tags((name = "chess", description = "Lichess-backed chess endpoints"))
)]
pub struct ApiDoc;
