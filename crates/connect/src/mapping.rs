//! Conversion from Lunch Money wire models to the core's raw shapes.

use balancewatch_core::records::RawBalance;
use balancewatch_core::refresh::UserProfile;

use super::models::{ApiAsset, ApiPlaidAccount, ApiUser};

/// Map a manual asset into the normalizer's input shape.
pub(crate) fn asset_to_raw(asset: &ApiAsset) -> RawBalance {
    RawBalance {
        id: asset.id,
        name: asset.name.clone(),
        display_name: asset.display_name.clone(),
        balance: asset.balance.clone(),
        currency: asset.currency.clone(),
        type_name: asset.type_name.clone(),
        subtype_name: asset.subtype_name.clone(),
        institution_name: asset.institution_name.clone(),
        to_base: asset.to_base,
        balance_as_of: asset.balance_as_of.clone(),
    }
}

/// Map a Plaid-linked account into the normalizer's input shape.
///
/// Plaid accounts carry no pre-converted base value; `balance_last_update`
/// plays the role of the as-of timestamp.
pub(crate) fn plaid_account_to_raw(account: &ApiPlaidAccount) -> RawBalance {
    RawBalance {
        id: account.id,
        name: account.name.clone(),
        display_name: account.display_name.clone(),
        balance: account.balance.clone(),
        currency: account.currency.clone(),
        type_name: account.account_type.clone(),
        subtype_name: account.subtype.clone(),
        institution_name: account.institution_name.clone(),
        to_base: None,
        balance_as_of: account.balance_last_update.clone(),
    }
}

pub(crate) fn user_to_profile(user: ApiUser) -> UserProfile {
    UserProfile {
        user_name: user.user_name,
        primary_currency: user.primary_currency,
    }
}
