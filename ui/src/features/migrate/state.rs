use crate::console_debug;

use super::amount::{max_amount_text, sanitize_amount_input};
use alloy_primitives::Address;

use super::types::{ApprovalState, LpToken, MetamaskError, MigrationMode, WalletContext};
use super::view::toggled_mode;

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum MigrateAction {
    // Inventory
    SetLoading(bool),
    SetUpdatingLpTokens(bool),
    /// Inventory fetched for `WalletContext`; dropped if the wallet moved on since
    LpTokensLoaded(WalletContext, Vec<LpToken>),

    // User choices
    ToggleMode(MigrationMode),
    ToggleLpToken(LpToken),
    SetAmount(String),
    FillMaxAmount,

    // Approve / migrate lifecycle
    SetApproval(ApprovalState),
    /// Allowance read for a pair; never overrides an approval in flight
    ApprovalChecked {
        wallet: WalletContext,
        token: Address,
        approval: ApprovalState,
    },
    SetMigrationPending(bool),
    SetMigrationError(Option<MetamaskError>),
    MigrationSucceeded,

    // Account or chain changed
    Reset(WalletContext),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MigrateState {
    /// Wallet the inventory belongs to
    pub wallet: WalletContext,
    pub mode: Option<MigrationMode>,
    pub selected_lp_token: Option<LpToken>,
    pub amount: String,
    pub lp_tokens: Vec<LpToken>,
    pub loading: bool,
    pub updating_lp_tokens: bool,
    pub is_migration_pending: bool,
    pub approval: ApprovalState,
    pub error: Option<MetamaskError>,
}

impl MigrateState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: MigrateAction) {
        match action {
            MigrateAction::SetLoading(loading) => {
                self.loading = loading;
            }
            MigrateAction::SetUpdatingLpTokens(updating) => {
                self.updating_lp_tokens = updating;
            }
            MigrateAction::LpTokensLoaded(wallet, tokens) => {
                if wallet != self.wallet {
                    console_debug!("[Reducer] Dropping LP tokens for a previous wallet");
                    return;
                }
                console_debug!("[Reducer] Received {} LP tokens", tokens.len());
                // Keep the selection only if the same pool is still listed, with its fresh balance
                self.selected_lp_token = self.selected_lp_token.take().and_then(|selected| {
                    tokens
                        .iter()
                        .find(|t| t.address == selected.address && t.has_balance())
                        .cloned()
                });
                self.lp_tokens = tokens;
                self.loading = false;
            }

            MigrateAction::ToggleMode(mode) => {
                self.mode = toggled_mode(self.mode, mode);
                if self.mode.is_none() {
                    self.selected_lp_token = None;
                    self.amount.clear();
                }
                self.approval = ApprovalState::NotApproved;
                self.error = None;
            }
            MigrateAction::ToggleLpToken(token) => {
                let already_selected = self
                    .selected_lp_token
                    .as_ref()
                    .is_some_and(|selected| selected.address == token.address);
                self.selected_lp_token = if already_selected { None } else { Some(token) };
                self.amount.clear();
                self.approval = ApprovalState::NotApproved;
                self.error = None;
            }
            MigrateAction::SetAmount(raw) => {
                if let Some(amount) = sanitize_amount_input(&raw) {
                    self.amount = amount;
                }
            }
            MigrateAction::FillMaxAmount => {
                if let Some(token) = &self.selected_lp_token {
                    self.amount = max_amount_text(token);
                }
            }

            MigrateAction::SetApproval(approval) => {
                self.approval = approval;
            }
            MigrateAction::ApprovalChecked {
                wallet,
                token,
                approval,
            } => {
                let current = wallet == self.wallet
                    && self.mode == Some(MigrationMode::Approve)
                    && self
                        .selected_lp_token
                        .as_ref()
                        .is_some_and(|selected| selected.address == token);
                if current && self.approval != ApprovalState::Pending {
                    self.approval = approval;
                }
            }
            MigrateAction::SetMigrationPending(pending) => {
                self.is_migration_pending = pending;
            }
            MigrateAction::SetMigrationError(error) => {
                self.error = error;
            }
            MigrateAction::MigrationSucceeded => {
                self.selected_lp_token = None;
                self.amount.clear();
                self.approval = ApprovalState::NotApproved;
                self.error = None;
            }

            MigrateAction::Reset(wallet) => {
                *self = MigrateState {
                    wallet,
                    ..MigrateState::default()
                };
            }
        }

        self.enforce_amount_guard();
    }

    /// Reduces the state based on an action
    pub fn reduce(mut self, action: MigrateAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    /// Mode chosen, something to migrate and a pair picked
    pub fn is_ready(&self) -> bool {
        self.mode.is_some() && !self.lp_tokens.is_empty() && self.selected_lp_token.is_some()
    }

    pub fn is_selected(&self, token: &LpToken) -> bool {
        self.selected_lp_token
            .as_ref()
            .is_some_and(|selected| selected.address == token.address)
    }

    /// Tokens the user can pick from: only positions with a balance
    pub fn selectable_lp_tokens(&self) -> impl Iterator<Item = &LpToken> {
        self.lp_tokens.iter().filter(|t| t.has_balance())
    }

    // The amount only means something while a mode and a pair are chosen
    fn enforce_amount_guard(&mut self) {
        if !self.is_ready() && !self.amount.is_empty() {
            self.amount.clear();
        }
    }
}
