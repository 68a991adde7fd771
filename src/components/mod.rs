pub mod app;
pub mod notifications;
pub mod theme_toggle;
pub mod wallet;
pub mod wave_form;
pub mod wave_list;

use crate::{
    contract::WavePortal,
    eip1193::Eip1193,
    provider::{MessageBoard, WalletProvider},
    theme::{LocalStorage, ThemeStorage},
};
use std::rc::Rc;

/// External collaborators shared with every component through context.
#[derive(Clone)]
pub struct Services {
    pub wallet: Option<Rc<dyn WalletProvider>>,
    pub board: Option<Rc<dyn MessageBoard>>,
    pub storage: Rc<dyn ThemeStorage>,
}

impl Services {
    /// Wires up `window.ethereum` and `localStorage`. A missing wallet leaves both capabilities unset.
    pub fn browser() -> Self {
        let provider = Eip1193::detect();
        if provider.is_none() {
            log::info!("Make sure you have MetaMask!");
        }
        let board = provider.clone().and_then(|provider| match WavePortal::new(provider) {
            Ok(board) => Some(Rc::new(board) as Rc<dyn MessageBoard>),
            Err(err) => {
                log::error!("could not bind contract: {}", err);
                None
            }
        });
        Services {
            wallet: provider.map(|provider| Rc::new(provider) as Rc<dyn WalletProvider>),
            board,
            storage: Rc::new(LocalStorage),
        }
    }

    pub fn wallet(&self) -> Option<&dyn WalletProvider> {
        self.wallet.as_deref()
    }

    pub fn board(&self) -> Option<&dyn MessageBoard> {
        self.board.as_deref()
    }
}
