//! Browser wallet access over EIP-1193 (`window.ethereum.request`)

use std::str::FromStr;

use alloy_primitives::Address;
use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::features::migrate::{MetamaskError, WalletContext};
use crate::services::errors::{WalletError, WalletResult};
use crate::utils::serialization::parse_hex_u64;
use crate::{console_debug, console_warn};

/// Source of the connected account and chain
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Accounts already authorized for this site, without prompting
    async fn accounts(&self) -> WalletResult<Vec<Address>>;

    async fn chain_id(&self) -> WalletResult<u64>;

    /// Prompt the user to connect
    async fn request_accounts(&self) -> WalletResult<Vec<Address>>;

    /// Whether a wallet is present at all
    fn is_available(&self) -> bool;

    /// Call `on_change` whenever the account or chain switches
    fn watch(&self, on_change: Box<dyn Fn()>) {
        let _ = on_change;
    }

    async fn context(&self) -> WalletContext {
        if !self.is_available() {
            return WalletContext::default();
        }
        let (accounts, chain_id) = futures::join!(self.accounts(), self.chain_id());
        let account = match accounts {
            Ok(accounts) => accounts.into_iter().next(),
            Err(e) => {
                console_warn!("[Wallet] Could not read accounts: {}", e);
                None
            }
        };
        let chain_id = match chain_id {
            Ok(id) => Some(id),
            Err(e) => {
                console_warn!("[Wallet] Could not read chain id: {}", e);
                None
            }
        };
        WalletContext { account, chain_id }
    }
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    method: &'a str,
    params: Vec<String>,
}

/// Injected browser wallet (MetaMask and compatibles)
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserWallet;

impl BrowserWallet {
    pub fn new() -> Self {
        Self
    }

    fn provider() -> Option<JsValue> {
        let window = web_sys::window()?;
        let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            None
        } else {
            Some(ethereum)
        }
    }

    async fn request<T: DeserializeOwned>(&self, method: &str) -> WalletResult<T> {
        let provider = Self::provider().ok_or(WalletError::NoProvider)?;
        let decode = |reason: String| WalletError::Decode {
            method: method.to_string(),
            reason,
        };

        let request_fn: Function = Reflect::get(&provider, &JsValue::from_str("request"))
            .map_err(|e| decode(format!("{:?}", e)))?
            .dyn_into()
            .map_err(|_| decode("provider.request is not a function".to_string()))?;

        let args = RpcRequest {
            method,
            params: Vec::new(),
        }
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| decode(e.to_string()))?;

        let promise: Promise = request_fn
            .call1(&provider, &args)
            .map_err(|e| rpc_error(method, e))?
            .dyn_into()
            .map_err(|_| decode("provider.request did not return a promise".to_string()))?;

        let value = JsFuture::from(promise)
            .await
            .map_err(|e| rpc_error(method, e))?;

        console_debug!("[Wallet] {} answered", method);
        serde_wasm_bindgen::from_value(value).map_err(|e| decode(e.to_string()))
    }
}

fn rpc_error(method: &str, raw: JsValue) -> WalletError {
    let source = serde_wasm_bindgen::from_value::<MetamaskError>(raw.clone())
        .ok()
        .filter(|e| e.code.is_some() || e.message.is_some())
        .unwrap_or_else(|| MetamaskError::from_message(format!("{:?}", raw)));
    WalletError::Rpc {
        method: method.to_string(),
        source,
    }
}

fn parse_accounts(method: &str, raw: Vec<String>) -> WalletResult<Vec<Address>> {
    raw.iter()
        .map(|a| {
            Address::from_str(a).map_err(|e| WalletError::Decode {
                method: method.to_string(),
                reason: format!("bad address {}: {}", a, e),
            })
        })
        .collect()
}

#[async_trait(?Send)]
impl WalletProvider for BrowserWallet {
    async fn accounts(&self) -> WalletResult<Vec<Address>> {
        let raw: Vec<String> = self.request("eth_accounts").await?;
        parse_accounts("eth_accounts", raw)
    }

    async fn chain_id(&self) -> WalletResult<u64> {
        let raw: String = self.request("eth_chainId").await?;
        parse_hex_u64(&raw).map_err(|reason| WalletError::Decode {
            method: "eth_chainId".to_string(),
            reason,
        })
    }

    async fn request_accounts(&self) -> WalletResult<Vec<Address>> {
        let raw: Vec<String> = self.request("eth_requestAccounts").await?;
        parse_accounts("eth_requestAccounts", raw)
    }

    fn is_available(&self) -> bool {
        Self::provider().is_some()
    }

    fn watch(&self, on_change: Box<dyn Fn()>) {
        let Some(provider) = Self::provider() else {
            return;
        };
        let Ok(on) = Reflect::get(&provider, &JsValue::from_str("on")) else {
            return;
        };
        let Ok(on) = on.dyn_into::<Function>() else {
            console_warn!("[Wallet] Provider has no event emitter, changes will need a reload");
            return;
        };

        let callback: std::rc::Rc<dyn Fn()> = std::rc::Rc::from(on_change);
        for event in ["accountsChanged", "chainChanged"] {
            let callback = callback.clone();
            let handler = Closure::<dyn Fn(JsValue)>::new(move |_payload: JsValue| callback());
            if let Err(e) = on.call2(&provider, &JsValue::from_str(event), handler.as_ref()) {
                console_warn!("[Wallet] Could not subscribe to {}: {:?}", event, e);
            }
            // The provider keeps the listener for the page lifetime
            handler.forget();
        }
    }
}
