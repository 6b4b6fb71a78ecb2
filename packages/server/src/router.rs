//! Assembles the Axum [`Router`] from all handler modules.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    handlers::{
        casts, docs, docs::ApiDocs, events, info, links, onchain, reactions, submit, users,
        AppState,
    },
    middleware::api_key::require_api_key,
    storage::Storage,
};

/// Build the complete application router with shared state.
///
/// The docs routes are always mounted. The `/v1` mock hub routes are mounted
/// only when `config.mock_hub` is set, behind the API-key check.
pub fn build_router(
    storage: Arc<dyn Storage>,
    config: ServerConfig,
    docs: Arc<ApiDocs>,
) -> Router {
    let mock_hub = config.mock_hub;

    let state = AppState {
        storage,
        config,
        docs,
    };

    let mut router = Router::new()
        .route("/", get(docs::root))
        .route("/api-docs", get(docs::swagger_ui))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .route("/api-docs/openapi.yaml", get(docs::openapi_yaml));

    if mock_hub {
        router = router.merge(hub_routes(state.clone()));
    }

    router
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Every catalog route, guarded by the API-key middleware.
fn hub_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/v1/info", get(info::get_info))
        // Casts
        .route("/v1/castById", get(casts::cast_by_id))
        .route("/v1/castsByFid", get(casts::casts_by_fid))
        .route("/v1/castsByMention", get(casts::casts_by_mention))
        .route("/v1/castsByParent", get(casts::casts_by_parent))
        // Reactions
        .route("/v1/reactionById", get(reactions::reaction_by_id))
        .route("/v1/reactionsByCast", get(reactions::reactions_by_cast))
        .route("/v1/reactionsByFid", get(reactions::reactions_by_fid))
        .route("/v1/reactionsByTarget", get(reactions::reactions_by_target))
        // Links
        .route("/v1/linkById", get(links::link_by_id))
        .route("/v1/linksByFid", get(links::links_by_fid))
        .route("/v1/linksByTargetFid", get(links::links_by_target_fid))
        // Users
        .route("/v1/userDataByFid", get(users::user_data_by_fid))
        .route("/v1/fids", get(users::list_fids))
        .route("/v1/storageLimitsByFid", get(users::storage_limits_by_fid))
        .route("/v1/userNameProofsByFid", get(users::username_proofs_by_fid))
        .route("/v1/userNameProofByName", get(users::username_proof_by_name))
        .route("/v1/verificationsByFid", get(users::verifications_by_fid))
        // On-chain
        .route(
            "/v1/onChainIdRegistryEventByAddress",
            get(onchain::id_registry_event_by_address),
        )
        .route("/v1/onChainEventsByFid", get(onchain::on_chain_events_by_fid))
        .route("/v1/onChainSignersByFid", get(onchain::on_chain_signers_by_fid))
        // Write path
        .route("/v1/submitMessage", post(submit::submit_message))
        .route("/v1/validateMessage", post(submit::validate_message_only))
        // Events
        .route("/v1/events", get(events::events))
        .route("/v1/eventById", get(events::event_by_id))
        .route_layer(axum::middleware::from_fn_with_state(state, require_api_key))
}
