use tracing::{debug, info};

use ht_state::WorldState;
use ht_types::Home;

use crate::error::{ContractError, ContractResult};

/// Key of the record written by [`HomeTransfer::init_ledger`].
pub const SEED_KEY: &str = "1";

/// The HomeTransfer contract.
///
/// Wraps an injected world state and executes the four record operations
/// against it. The contract itself is stateless: it holds nothing between
/// invocations beyond the backend handle, and a failed operation performs
/// no write.
pub struct HomeTransfer<S: WorldState> {
    state: S,
}

impl<S: WorldState> HomeTransfer<S> {
    /// Bind the contract to a world state for the current invocation.
    pub fn new(state: S) -> Self {
        Self { state }
    }

    /// The underlying world state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Seed the ledger with one fixed record at key "1".
    ///
    /// Unconditional: any existing value at the seed key is overwritten.
    pub fn init_ledger(&self) -> ContractResult<()> {
        let home = Home::new(SEED_KEY, "LakeView", "2000", "Mark", "6756");
        self.put_home(&home)?;
        info!(id = SEED_KEY, "ledger initialized with seed record");
        Ok(())
    }

    /// Add a new home record under `id`.
    ///
    /// Fails with [`ContractError::AlreadyExists`] if a record is already
    /// stored at `id`; nothing is written in that case.
    pub fn add_new_home(
        &self,
        id: &str,
        name: &str,
        area: &str,
        owner: &str,
        value: &str,
    ) -> ContractResult<Home> {
        if self.read_home(id)?.is_some() {
            debug!(id, "create rejected: record already exists");
            return Err(ContractError::AlreadyExists(id.to_owned()));
        }

        let home = Home::new(id, name, area, owner, value);
        self.put_home(&home)?;
        info!(id, owner, "home record created");
        Ok(home)
    }

    /// Retrieve the home record stored at `id`.
    ///
    /// Read-only. Fails with [`ContractError::NotFound`] when no record
    /// exists at `id`.
    pub fn query_home_by_id(&self, id: &str) -> ContractResult<Home> {
        self.read_home(id)?
            .ok_or_else(|| ContractError::NotFound(id.to_owned()))
    }

    /// Transfer ownership of the record at `id` to `new_owner`.
    ///
    /// Fails with [`ContractError::NotFound`] when no record exists at `id`;
    /// nothing is written in that case. On success the stored value is
    /// replaced in full by a record identical except for `owner`, and the
    /// new record is returned.
    pub fn change_home_ownership(&self, id: &str, new_owner: &str) -> ContractResult<Home> {
        let home = self
            .read_home(id)?
            .ok_or_else(|| ContractError::NotFound(id.to_owned()))?;

        let transferred = home.with_owner(new_owner);
        self.put_home(&transferred)?;
        info!(id, from = %home.owner, to = new_owner, "home ownership transferred");
        Ok(transferred)
    }

    /// Read and decode the record at `id`.
    ///
    /// Returns `Ok(None)` when the key is absent or its value is empty;
    /// existence of a record is defined by a non-empty stored value.
    fn read_home(&self, id: &str) -> ContractResult<Option<Home>> {
        match self.state.get(id)? {
            Some(bytes) if !bytes.is_empty() => Ok(Some(Home::from_state_bytes(&bytes)?)),
            _ => Ok(None),
        }
    }

    /// Encode and store a record under its own id.
    fn put_home(&self, home: &Home) -> ContractResult<()> {
        let json = home.to_json()?;
        self.state.put(&home.id, json.as_bytes())?;
        Ok(())
    }
}
