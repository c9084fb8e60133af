//! One-shot seeding utility: replaces the store's entire identifier set.
//!
//! Usage: `seed <video-id> [<video-id> ...]` with `SHOWREEL_MONGO_URI` set.
//! Never invoked by the serving core at runtime.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use anyhow::{Context as _, bail};
use mongodb::Client;
use mongodb::bson::doc;

use showreel_api::store::{IdentifierDocument, VIDEOS_COLLECTION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let ids: Vec<String> = std::env::args().skip(1).collect();
    if ids.is_empty() {
        bail!("usage: seed <video-id> [<video-id> ...]");
    }

    let uri = std::env::var("SHOWREEL_MONGO_URI")
        .context("SHOWREEL_MONGO_URI must be set to the store connection string")?;

    let client = Client::with_uri_str(&uri)
        .await
        .context("connect to identifier store")?;
    let database = client
        .default_database()
        .context("connection string must include the database name")?;
    let collection = database.collection::<IdentifierDocument>(VIDEOS_COLLECTION);

    // Replace, don't append: the seed defines the whole curated set.
    collection
        .delete_many(doc! {})
        .await
        .context("clear existing identifiers")?;

    let documents: Vec<IdentifierDocument> = ids
        .into_iter()
        .map(|video_id| IdentifierDocument { video_id })
        .collect();
    let inserted = collection
        .insert_many(&documents)
        .await
        .context("insert identifiers")?;

    println!("inserted {} video identifiers", inserted.inserted_ids.len());
    Ok(())
}
