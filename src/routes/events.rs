//! Server-Sent Events feed of detected recipes for the embedding page.

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use tokio_stream::{Stream, StreamExt, wrappers::BroadcastStream};

use crate::state::SharedState;

pub async fn recipe_events_handler(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.recipes.subscribe()).filter_map(|item| match item {
        Ok(event) => match Event::default().event("recipe").json_data(&event) {
            Ok(sse) => Some(Ok(sse)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode recipe event");
                None
            }
        },
        // Slow subscriber; skip what it missed
        Err(e) => {
            tracing::warn!(error = %e, "recipe subscriber lagged");
            None
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
