//! Wallet session: silent reconnect on load and explicit connect requests.

use crate::{
    error::Error,
    provider::WalletProvider,
    store::{Action, Store},
};

/// Restores an account the user granted earlier. Never prompts and never shows a toast.
pub async fn check_existing_authorization(store: &impl Store, wallet: Option<&dyn WalletProvider>) {
    let Some(wallet) = wallet else {
        log::info!("Make sure you have MetaMask!");
        return;
    };
    match wallet.authorized_accounts().await {
        Ok(accounts) => match accounts.into_iter().next() {
            Some(account) => {
                log::info!("Found an authorized account: {}", account);
                store.dispatch(Action::AccountConnected(account));
            }
            None => log::info!("No authorized account found"),
        },
        Err(err) => log::warn!("could not read authorized accounts: {}", err),
    }
}

/// Prompts the wallet for access and stores the first granted account.
pub async fn request_connection(store: &impl Store, wallet: Option<&dyn WalletProvider>) {
    if store.snapshot().loading {
        log::debug!("connect ignored, another request is in flight");
        return;
    }
    let Some(wallet) = wallet else {
        store.notify_error(&Error::ProviderNotFound);
        return;
    };

    store.dispatch(Action::ConnectStarted);
    let granted = wallet
        .request_accounts()
        .await
        .and_then(|accounts| accounts.into_iter().next().ok_or(Error::UserRejected));
    match granted {
        Ok(account) => {
            log::info!("Connected {}", account);
            store.dispatch(Action::AccountConnected(account));
            store.notify_success("Wallet connected");
        }
        Err(err) => {
            log::warn!("wallet connection failed: {}", err);
            store.dispatch(Action::ConnectFailed);
            store.notify_error(&err);
        }
    }
}
