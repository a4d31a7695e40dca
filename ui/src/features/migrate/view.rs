//! What each part of the page shows for a given state
//!
//! Components render these descriptions; keeping the decisions here lets them
//! be checked without a renderer.

use super::amount::{format_units, AmountCheck, AmountError};
use super::state::MigrateState;
use super::types::{exchange_label, version_tag, ApprovalState, Exchange, LpToken, MigrationMode};
use crate::services::errors::WalletError;

/// Document meta description
pub const PAGE_DESCRIPTION: &str = "Migrate LP tokens to Sushi LP tokens";

/// Instructions under the page title
pub fn page_caption(exchange: Option<Exchange>) -> String {
    format!(
        "Select a wallet type, select a pair, input an amount, and click migrate to remove your liquidity from {} and add to SushiSwap.",
        exchange_label(exchange)
    )
}

/// Mode rows to show: both while unset, only the active one after
pub fn visible_modes(mode: Option<MigrationMode>) -> Vec<MigrationMode> {
    MigrationMode::ALL
        .into_iter()
        .filter(|candidate| mode.is_none() || mode == Some(*candidate))
        .collect()
}

/// Mode after clicking `clicked`
pub fn toggled_mode(current: Option<MigrationMode>, clicked: MigrationMode) -> Option<MigrationMode> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIcon {
    Close,
    Chevron,
}

/// One entry of the pair list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairRow {
    pub pair: String,
    /// Version badge, shown on every row
    pub version: &'static str,
    pub icon: RowIcon,
    pub balance: Option<String>,
    pub dimmed: bool,
}

impl PairRow {
    pub fn derive(
        token: &LpToken,
        is_selected: bool,
        updating: bool,
        exchange: Option<Exchange>,
    ) -> Self {
        Self {
            pair: token.pair_label(),
            version: version_tag(exchange),
            icon: if is_selected {
                RowIcon::Close
            } else {
                RowIcon::Chevron
            },
            balance: is_selected.then(|| format_units(token.balance, token.decimals)),
            dimmed: updating,
        }
    }
}

/// What the pair list section shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairsPanel {
    Hidden,
    /// Nothing at all in the inventory
    Empty,
    /// Heading plus the pairs with a balance (possibly none)
    Listed {
        heading: String,
        rows: Vec<(LpToken, bool)>,
    },
}

impl PairsPanel {
    pub fn derive(state: &MigrateState, exchange: Option<Exchange>) -> Self {
        if state.mode.is_none() {
            return PairsPanel::Hidden;
        }
        if state.lp_tokens.is_empty() {
            return PairsPanel::Empty;
        }
        PairsPanel::Listed {
            heading: format!("Your {} Liquidity", exchange_label(exchange)),
            rows: state
                .selectable_lp_tokens()
                .map(|token| (token.clone(), state.is_selected(token)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveButton {
    pub label: &'static str,
    pub disabled: bool,
    pub confirmed: bool,
    /// Softer disabled look while the approval transaction is in flight
    pub alt_disabled_style: bool,
    pub pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateButton {
    pub label: &'static str,
    pub disabled: bool,
    pub pending: bool,
}

/// Main body of the buttons panel, in display precedence order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonsBody {
    InsufficientBalance,
    InvalidAmount(AmountError),
    Loading,
    Actions {
        approve: Option<ApproveButton>,
        migrate: Option<MigrateButton>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonsPanel {
    pub token_symbol: String,
    pub amount: String,
    pub body: ButtonsBody,
    pub error_message: Option<String>,
    pub info_line: String,
}

impl ButtonsPanel {
    /// `None` when the panel is hidden (no mode, no tokens or no pair).
    ///
    /// `has_migrator` is false when no migration contract is known for the chain;
    /// approving is then impossible and the reason is shown instead.
    pub fn derive(
        state: &MigrateState,
        exchange: Option<Exchange>,
        has_migrator: bool,
    ) -> Option<Self> {
        let mode = state.mode?;
        if state.lp_tokens.is_empty() {
            return None;
        }
        let token = state.selected_lp_token.as_ref()?;

        let amount_missing = state.amount.is_empty();
        let body = match AmountCheck::evaluate(token.balance, &state.amount, token.decimals) {
            AmountCheck::Insufficient(_) => ButtonsBody::InsufficientBalance,
            AmountCheck::Invalid(e) => ButtonsBody::InvalidAmount(e),
            AmountCheck::Sufficient(_) if state.loading => ButtonsBody::Loading,
            AmountCheck::Sufficient(_) => {
                let approve = (mode == MigrationMode::Approve)
                    .then(|| approve_button(state.approval, amount_missing, has_migrator));
                let migrate_visible = match mode {
                    MigrationMode::Approve => state.approval == ApprovalState::Approved,
                    MigrationMode::Permit => true,
                };
                let migrate = migrate_visible.then(|| MigrateButton {
                    label: if state.is_migration_pending {
                        "Migrating"
                    } else {
                        "Migrate"
                    },
                    disabled: token.balance.is_zero()
                        || state.is_migration_pending
                        || amount_missing,
                    pending: state.is_migration_pending,
                });
                ButtonsBody::Actions { approve, migrate }
            }
        };

        let pair = token.pair_label();
        Some(Self {
            token_symbol: token.symbol.clone(),
            amount: state.amount.clone(),
            body,
            error_message: state
                .error
                .as_ref()
                .and_then(|e| e.display_message())
                .map(str::to_string)
                .or_else(|| missing_migrator(state, mode, has_migrator)),
            info_line: format!(
                "Your {} {} liquidity will become Sushiswap {} liquidity.",
                exchange_label(exchange),
                pair,
                pair
            ),
        })
    }
}

fn missing_migrator(
    state: &MigrateState,
    mode: MigrationMode,
    has_migrator: bool,
) -> Option<String> {
    if has_migrator || mode != MigrationMode::Approve {
        return None;
    }
    let error = match state.wallet.chain_id {
        Some(chain_id) => WalletError::NoMigrator { chain_id },
        None => WalletError::NotConnected,
    };
    Some(error.to_string())
}

fn approve_button(approval: ApprovalState, amount_missing: bool, has_migrator: bool) -> ApproveButton {
    ApproveButton {
        label: match approval {
            ApprovalState::Pending => "Approving",
            ApprovalState::Approved => "Approved",
            ApprovalState::NotApproved => "Approve",
        },
        disabled: approval != ApprovalState::NotApproved || amount_missing || !has_migrator,
        confirmed: approval == ApprovalState::Approved,
        alt_disabled_style: approval == ApprovalState::Pending,
        pending: approval == ApprovalState::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::migrate::state::MigrateAction;
    use crate::features::migrate::types::{MetamaskError, TokenInfo, WalletContext};
    use alloy_primitives::{Address, U256};

    fn eth_sushi(balance: U256) -> LpToken {
        LpToken {
            address: Address::repeat_byte(0x79),
            symbol: "UNI-V2".to_string(),
            decimals: 18,
            token_a: TokenInfo {
                address: Address::ZERO,
                symbol: "ETH".to_string(),
                decimals: 18,
            },
            token_b: TokenInfo {
                address: Address::repeat_byte(0x6b),
                symbol: "SUSHI".to_string(),
                decimals: 18,
            },
            balance,
        }
    }

    fn two_eth() -> U256 {
        U256::from(2_000_000_000_000_000_000u128)
    }

    fn selected(mode: MigrationMode, amount: &str) -> MigrateState {
        MigrateState::default()
            .reduce(MigrateAction::LpTokensLoaded(WalletContext::default(), vec![eth_sushi(two_eth())]))
            .reduce(MigrateAction::ToggleMode(mode))
            .reduce(MigrateAction::ToggleLpToken(eth_sushi(two_eth())))
            .reduce(MigrateAction::SetAmount(amount.to_string()))
    }

    fn actions(panel: &ButtonsPanel) -> (Option<ApproveButton>, Option<MigrateButton>) {
        match &panel.body {
            ButtonsBody::Actions { approve, migrate } => (approve.clone(), migrate.clone()),
            other => panic!("expected action buttons, got {:?}", other),
        }
    }

    #[test]
    fn chooser_shows_both_modes_until_one_is_picked() {
        assert_eq!(visible_modes(None).len(), 2);
        assert_eq!(visible_modes(Some(MigrationMode::Permit)), vec![MigrationMode::Permit]);
        assert_eq!(visible_modes(Some(MigrationMode::Approve)), vec![MigrationMode::Approve]);
    }

    #[test]
    fn clicking_active_mode_unsets_it() {
        assert_eq!(toggled_mode(None, MigrationMode::Approve), Some(MigrationMode::Approve));
        assert_eq!(toggled_mode(Some(MigrationMode::Approve), MigrationMode::Approve), None);
        assert_eq!(
            toggled_mode(Some(MigrationMode::Approve), MigrationMode::Permit),
            Some(MigrationMode::Permit)
        );
    }

    #[test]
    fn panel_hidden_without_mode_tokens_or_selection() {
        assert!(ButtonsPanel::derive(&MigrateState::default(), Some(Exchange::Uniswap), true).is_none());

        let no_pair = MigrateState::default()
            .reduce(MigrateAction::LpTokensLoaded(WalletContext::default(), vec![eth_sushi(two_eth())]))
            .reduce(MigrateAction::ToggleMode(MigrationMode::Permit));
        assert!(ButtonsPanel::derive(&no_pair, Some(Exchange::Uniswap), true).is_none());
    }

    #[test]
    fn permit_mode_shows_migrate_regardless_of_approval() {
        for approval in [
            ApprovalState::NotApproved,
            ApprovalState::Pending,
            ApprovalState::Approved,
        ] {
            let state = selected(MigrationMode::Permit, "1")
                .reduce(MigrateAction::SetApproval(approval));
            let panel = ButtonsPanel::derive(&state, Some(Exchange::Uniswap), true).unwrap();
            let (approve, migrate) = actions(&panel);
            assert!(approve.is_none());
            assert!(migrate.is_some());
        }
    }

    #[test]
    fn approve_mode_shows_migrate_only_once_approved() {
        let state = selected(MigrationMode::Approve, "1");
        let (approve, migrate) = actions(&ButtonsPanel::derive(&state, None, true).unwrap());
        let approve = approve.unwrap();
        assert_eq!(approve.label, "Approve");
        assert!(!approve.disabled);
        assert!(migrate.is_none());

        let pending = state.clone().reduce(MigrateAction::SetApproval(ApprovalState::Pending));
        let (approve, migrate) = actions(&ButtonsPanel::derive(&pending, None, true).unwrap());
        let approve = approve.unwrap();
        assert_eq!(approve.label, "Approving");
        assert!(approve.disabled && approve.alt_disabled_style);
        assert!(migrate.is_none());

        let approved = state.reduce(MigrateAction::SetApproval(ApprovalState::Approved));
        let (approve, migrate) = actions(&ButtonsPanel::derive(&approved, None, true).unwrap());
        let approve = approve.unwrap();
        assert_eq!(approve.label, "Approved");
        assert!(approve.confirmed && approve.disabled);
        assert!(!migrate.unwrap().disabled);
    }

    #[test]
    fn approve_disabled_without_amount() {
        let state = selected(MigrationMode::Approve, "");
        let (approve, _) = actions(&ButtonsPanel::derive(&state, None, true).unwrap());
        assert!(approve.unwrap().disabled);
    }

    #[test]
    fn insufficient_balance_takes_priority() {
        let state = selected(MigrationMode::Permit, "2.000000000000000001")
            .reduce(MigrateAction::SetLoading(true));
        let panel = ButtonsPanel::derive(&state, Some(Exchange::Uniswap), true).unwrap();
        assert_eq!(panel.body, ButtonsBody::InsufficientBalance);

        let equal = selected(MigrationMode::Permit, "2");
        let (_, migrate) = actions(&ButtonsPanel::derive(&equal, None, true).unwrap());
        assert!(!migrate.unwrap().disabled);
    }

    #[test]
    fn loading_replaces_buttons_when_amount_fits() {
        let state = selected(MigrationMode::Permit, "1").reduce(MigrateAction::SetLoading(true));
        let panel = ButtonsPanel::derive(&state, None, true).unwrap();
        assert_eq!(panel.body, ButtonsBody::Loading);
    }

    #[test]
    fn too_precise_amount_is_reported_invalid() {
        let state = selected(MigrationMode::Permit, "0.0000000000000000001");
        let panel = ButtonsPanel::derive(&state, None, true).unwrap();
        assert_eq!(
            panel.body,
            ButtonsBody::InvalidAmount(AmountError::TooManyDecimals { decimals: 18 })
        );
    }

    #[test]
    fn migrate_disabled_while_pending_or_empty() {
        let pending = selected(MigrationMode::Permit, "1")
            .reduce(MigrateAction::SetMigrationPending(true));
        let (_, migrate) = actions(&ButtonsPanel::derive(&pending, None, true).unwrap());
        let migrate = migrate.unwrap();
        assert!(migrate.disabled);
        assert_eq!(migrate.label, "Migrating");

        let empty = selected(MigrationMode::Permit, "");
        let (_, migrate) = actions(&ButtonsPanel::derive(&empty, None, true).unwrap());
        assert!(migrate.unwrap().disabled);
    }

    #[test]
    fn rejected_signature_leaves_error_empty() {
        let rejected = selected(MigrationMode::Permit, "1").reduce(
            MigrateAction::SetMigrationError(Some(MetamaskError::new(4001, "User denied"))),
        );
        assert_eq!(ButtonsPanel::derive(&rejected, None, true).unwrap().error_message, None);

        let failed = selected(MigrationMode::Permit, "1").reduce(
            MigrateAction::SetMigrationError(Some(MetamaskError::new(-32603, "execution reverted"))),
        );
        assert_eq!(
            ButtonsPanel::derive(&failed, None, true).unwrap().error_message.as_deref(),
            Some("execution reverted")
        );

        let uncoded = selected(MigrationMode::Permit, "1").reduce(
            MigrateAction::SetMigrationError(Some(MetamaskError::from_message("gas too low"))),
        );
        assert_eq!(
            ButtonsPanel::derive(&uncoded, None, true).unwrap().error_message.as_deref(),
            Some("gas too low")
        );
    }

    #[test]
    fn info_line_names_exchange_and_pair() {
        let state = selected(MigrationMode::Permit, "1");
        let panel = ButtonsPanel::derive(&state, Some(Exchange::Uniswap), true).unwrap();
        assert_eq!(
            panel.info_line,
            "Your Uniswap ETH/SUSHI liquidity will become Sushiswap ETH/SUSHI liquidity."
        );

        let unknown = ButtonsPanel::derive(&state, None, true).unwrap();
        assert_eq!(
            unknown.info_line,
            "Your  ETH/SUSHI liquidity will become Sushiswap ETH/SUSHI liquidity."
        );
    }

    #[test]
    fn mainnet_permit_walkthrough_enables_migrate() {
        let exchange = Exchange::from_chain_id(Some(1));
        let state = MigrateState::default()
            .reduce(MigrateAction::LpTokensLoaded(WalletContext::default(), vec![eth_sushi(two_eth())]));
        assert_eq!(visible_modes(state.mode).len(), 2);

        let state = state.reduce(MigrateAction::ToggleMode(MigrationMode::Permit));
        assert_eq!(visible_modes(state.mode).len(), 1);

        let state = state
            .reduce(MigrateAction::ToggleLpToken(eth_sushi(two_eth())))
            .reduce(MigrateAction::SetAmount("1.5".to_string()));
        let panel = ButtonsPanel::derive(&state, exchange, true).unwrap();
        let (_, migrate) = actions(&panel);
        let migrate = migrate.unwrap();
        assert!(!migrate.disabled);
        assert_eq!(migrate.label, "Migrate");
        assert_eq!(panel.amount, "1.5");
    }

    #[test]
    fn every_pair_row_carries_the_version_badge() {
        let token = eth_sushi(two_eth());
        let unselected = PairRow::derive(&token, false, false, Some(Exchange::Uniswap));
        assert_eq!(unselected.pair, "ETH/SUSHI");
        assert_eq!(unselected.version, "v2");
        assert_eq!(unselected.icon, RowIcon::Chevron);
        assert_eq!(unselected.balance, None);

        let selected = PairRow::derive(&token, true, true, Some(Exchange::PancakeSwapV1));
        assert_eq!(selected.version, "v1");
        assert_eq!(selected.icon, RowIcon::Close);
        assert_eq!(selected.balance.as_deref(), Some("2.0"));
        assert!(selected.dimmed);

        assert_eq!(PairRow::derive(&token, false, false, None).version, "");
    }

    #[test]
    fn pairs_panel_empty_only_without_any_inventory() {
        let permit = MigrateState::default().reduce(MigrateAction::ToggleMode(MigrationMode::Permit));
        assert_eq!(PairsPanel::derive(&MigrateState::default(), None), PairsPanel::Hidden);
        assert_eq!(PairsPanel::derive(&permit, None), PairsPanel::Empty);

        let drained = permit.reduce(MigrateAction::LpTokensLoaded(
            WalletContext::default(),
            vec![eth_sushi(U256::ZERO)],
        ));
        assert_eq!(
            PairsPanel::derive(&drained, Some(Exchange::Uniswap)),
            PairsPanel::Listed {
                heading: "Your Uniswap Liquidity".to_string(),
                rows: Vec::new(),
            }
        );
    }

    #[test]
    fn pairs_panel_lists_only_funded_pairs() {
        let mut funded = eth_sushi(two_eth());
        funded.address = Address::repeat_byte(0x01);
        let state = MigrateState::default()
            .reduce(MigrateAction::LpTokensLoaded(
                WalletContext::default(),
                vec![eth_sushi(U256::ZERO), funded.clone()],
            ))
            .reduce(MigrateAction::ToggleMode(MigrationMode::Permit))
            .reduce(MigrateAction::ToggleLpToken(funded.clone()));

        match PairsPanel::derive(&state, Some(Exchange::PancakeSwapV1)) {
            PairsPanel::Listed { heading, rows } => {
                assert_eq!(heading, "Your PancakeSwapV1 Liquidity");
                assert_eq!(rows, vec![(funded, true)]);
            }
            other => panic!("expected a listed panel, got {:?}", other),
        }
    }

    #[test]
    fn approve_blocked_and_explained_without_migrator() {
        let state = MigrateState {
            wallet: WalletContext {
                account: Some(Address::repeat_byte(0xaa)),
                chain_id: Some(137),
            },
            ..selected(MigrationMode::Approve, "1")
        };
        let panel = ButtonsPanel::derive(&state, None, false).unwrap();
        let (approve, _) = actions(&panel);
        assert!(approve.unwrap().disabled);
        assert_eq!(
            panel.error_message.as_deref(),
            Some("No migration contract configured for chain 137")
        );

        let permit = MigrateState {
            mode: Some(MigrationMode::Permit),
            ..state
        };
        assert_eq!(ButtonsPanel::derive(&permit, None, false).unwrap().error_message, None);
    }

    #[test]
    fn page_copy_names_the_source_exchange() {
        assert_eq!(
            page_caption(Some(Exchange::PancakeSwapV1)),
            "Select a wallet type, select a pair, input an amount, and click migrate to remove your liquidity from PancakeSwapV1 and add to SushiSwap."
        );
        assert_eq!(PAGE_DESCRIPTION, "Migrate LP tokens to Sushi LP tokens");
    }
}
