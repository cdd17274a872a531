//! Subcommand implementations.

use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm};
use tinyhouse_client::{
    use_mutation, use_query, DeleteListingData, DeleteListingVariables, GraphQLClient,
    ListingsData, LogInData, LogInInput, LogInVariables, LogOutData, Mutation, Query,
    RequestState, DELETE_LISTING, LISTINGS, LOG_IN, LOG_OUT,
};

use crate::view;

/// The listing view: one query handle and one delete handle sharing a client.
struct ListingsScreen {
    listings: Query<ListingsData>,
    delete: Mutation<DeleteListingData, DeleteListingVariables>,
}

impl ListingsScreen {
    fn mount(client: &GraphQLClient) -> Self {
        Self {
            listings: use_query(client, LISTINGS),
            delete: use_mutation(client, DELETE_LISTING),
        }
    }

    /// Wait for the listings query to leave the idle and pending phases.
    async fn settled(&self) -> Result<RequestState<ListingsData>> {
        let mut rx = self.listings.subscribe();
        let state = rx
            .wait_for(|state| state.phase().is_settled())
            .await
            .context("Listings state closed before settling")?;
        Ok(state.clone())
    }

    fn render(&self) {
        view::print(&view::listings(
            view::TITLE,
            &self.listings.state(),
            &self.delete.state(),
        ));
    }

    /// Delete one listing, refetching only when the delete went through.
    async fn delete(&self, id: &str) -> Result<()> {
        let pending = self.delete.clone();
        let variables = DeleteListingVariables { id: id.to_string() };
        let running = tokio::spawn(async move { pending.execute(Some(variables)).await });

        let mut rx = self.delete.subscribe();
        let pending = rx
            .wait_for(|state| state.loading || state.phase().is_settled())
            .await
            .map(|state| state.loading)
            .unwrap_or(false);
        if pending {
            self.render();
        }

        let result = running.await.context("Delete task panicked")?;
        if result.is_ok() {
            self.listings.refetch().await;
        }
        self.render();
        result.with_context(|| format!("Failed to delete listing {}", id))
    }
}

pub async fn list(client: &GraphQLClient) -> Result<()> {
    let screen = ListingsScreen::mount(client);
    screen.settled().await?;
    screen.render();
    Ok(())
}

pub async fn delete(client: &GraphQLClient, id: &str, yes: bool) -> Result<()> {
    let screen = ListingsScreen::mount(client);
    let listings = screen.settled().await?;
    screen.render();

    if listings.error {
        anyhow::bail!("Listings could not be loaded");
    }
    let data = listings.data.unwrap_or_default();
    if !data.contains(id) {
        anyhow::bail!("No listing with id {}", id);
    }

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete listing {}?", id))
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    screen.delete(id).await
}

pub async fn login(client: &GraphQLClient, code: String) -> Result<()> {
    let log_in: Mutation<LogInData, LogInVariables> = use_mutation(client, LOG_IN);
    log_in
        .execute(Some(LogInVariables {
            input: Some(LogInInput { code }),
        }))
        .await
        .context("Log in failed")?;

    if let Some(data) = log_in.state().data {
        view::print(&view::viewer(&data.log_in));
    }
    Ok(())
}

pub async fn logout(client: &GraphQLClient) -> Result<()> {
    let log_out: Mutation<LogOutData, ()> = use_mutation(client, LOG_OUT);
    log_out.execute(None).await.context("Log out failed")?;

    if let Some(data) = log_out.state().data {
        view::print(&view::viewer(&data.log_out));
    }
    Ok(())
}
