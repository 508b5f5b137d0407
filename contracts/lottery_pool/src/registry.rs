use soroban_sdk::{Address, Env, Vec};

use crate::error::Error;
use crate::storage::Store;
use crate::types::{SupportedAsset, MAX_ASSET_PRECISION, MAX_RELATIVE_WORTH_BP};

pub struct Registry;

impl Registry {
    /// Whitelist a new asset. Owner only.
    pub fn add(
        env: &Env,
        asset: &Address,
        precision: u32,
        min_contribution: i128,
        relative_worth_bp: i128,
    ) -> Result<(), Error> {
        let admin = Store::admin(env)?;
        admin.require_auth();

        if Store::asset(env, asset).is_some() {
            return Err(Error::AlreadyWhitelisted);
        }
        Self::validate_fields(precision, min_contribution, relative_worth_bp)?;

        let entry = SupportedAsset {
            accepted: true,
            precision,
            active: true,
            min_contribution,
            relative_worth_bp,
        };
        Store::set_asset(env, asset, &entry);

        let mut list = Store::asset_list(env);
        list.push_back(asset.clone());
        Store::set_asset_list(env, &list);

        Ok(())
    }

    /// Update a whitelisted asset's fields, including `active`.
    /// The asset stays enumerable.
    pub fn edit(
        env: &Env,
        asset: &Address,
        precision: u32,
        min_contribution: i128,
        relative_worth_bp: i128,
        active: bool,
    ) -> Result<(), Error> {
        let admin = Store::admin(env)?;
        admin.require_auth();

        if Store::asset(env, asset).is_none() {
            return Err(Error::NotWhitelisted);
        }
        Self::validate_fields(precision, min_contribution, relative_worth_bp)?;

        let entry = SupportedAsset {
            accepted: true,
            precision,
            active,
            min_contribution,
            relative_worth_bp,
        };
        Store::set_asset(env, asset, &entry);

        Ok(())
    }

    /// Drop an asset from the whitelist. Existing ledger entries referencing
    /// it stay valid; only new contributions are refused.
    pub fn remove(env: &Env, asset: &Address) -> Result<(), Error> {
        let admin = Store::admin(env)?;
        admin.require_auth();

        if Store::asset(env, asset).is_none() {
            return Err(Error::NotWhitelisted);
        }
        Store::remove_asset(env, asset);

        // Swap-and-pop; enumeration order carries no meaning.
        let mut list = Store::asset_list(env);
        if let Some(index) = list.first_index_of(asset.clone()) {
            let last_index = list.len() - 1;
            if index != last_index {
                if let Some(last) = list.get(last_index) {
                    list.set(index, last);
                }
            }
            list.pop_back();
            Store::set_asset_list(env, &list);
        }

        Ok(())
    }

    /// All registered asset addresses, active or not.
    pub fn list(env: &Env) -> Vec<Address> {
        Store::asset_list(env)
    }

    fn validate_fields(
        precision: u32,
        min_contribution: i128,
        relative_worth_bp: i128,
    ) -> Result<(), Error> {
        if relative_worth_bp <= 0 || relative_worth_bp > MAX_RELATIVE_WORTH_BP {
            return Err(Error::InvalidWorth);
        }
        if precision > MAX_ASSET_PRECISION {
            return Err(Error::InvalidConfig);
        }
        if min_contribution < 0 {
            return Err(Error::InvalidAmount);
        }
        Ok(())
    }
}
