#![cfg_attr(not(feature = "std"), no_std, no_main)]

#[ink::contract]
mod standard_token {
    use ink::prelude::string::String;
    use ink::storage::Mapping;

    /// Fixed number of decimals; constructor supply is given in whole tokens.
    pub const DECIMALS: u8 = 18;

    pub type Result<T> = core::result::Result<T, Error>;

    #[derive(scale::Encode, scale::Decode, Debug, PartialEq, Eq, Clone, Copy)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        /// Debited account holds less than the requested amount.
        InsufficientBalance,
        /// Caller may not move that much out of the owner's balance.
        InsufficientAllowance,
        /// Target account is the zero account.
        InvalidRecipient,
        /// A non-zero allowance must be reset to zero before a new one is set.
        NonZeroAllowanceReset,
        /// Caller lacks the role required by the message.
        Unauthorized,
        Overflow,
    }

    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: AccountId,
        #[ink(topic)]
        to: AccountId,
        value: Balance,
    }

    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        spender: AccountId,
        value: Balance,
    }

    #[ink(event)]
    pub struct MinterSet {
        #[ink(topic)]
        minter: AccountId,
        enabled: bool,
    }

    #[ink(storage)]
    pub struct StandardToken {
        // metadata
        name: String,
        symbol: String,

        // roles
        owner_acc: AccountId,
        minters: Mapping<AccountId, bool>,

        // token state
        total_supply: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,
    }

    /// The reserved account that can never hold tokens or allowances.
    pub fn zero_account() -> AccountId {
        AccountId::from([0x0; 32])
    }

    impl StandardToken {
        // -------- constructors --------

        /// Creates the token and credits `initial_supply` whole tokens to the caller.
        ///
        /// The caller becomes the owner and the first minter.
        #[ink(constructor)]
        pub fn new(name: String, symbol: String, initial_supply: Balance) -> Result<Self> {
            let unit_val = Balance::from(10u8)
                .checked_pow(u32::from(DECIMALS))
                .ok_or(Error::Overflow)?;
            let supply_val = initial_supply.checked_mul(unit_val).ok_or(Error::Overflow)?;
            let owner_acc = Self::env().caller();

            let mut balances = Mapping::default();
            balances.insert(owner_acc, &supply_val);
            let mut minters = Mapping::default();
            minters.insert(owner_acc, &true);

            Ok(Self {
                name,
                symbol,
                owner_acc,
                minters,
                total_supply: supply_val,
                balances,
                allowances: Mapping::default(),
            })
        }

        // -------- read API --------

        #[ink(message)]
        pub fn name(&self) -> String {
            self.name.clone()
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            self.symbol.clone()
        }

        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            DECIMALS
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
            self.balances.get(owner_acc).unwrap_or(0)
        }

        #[ink(message)]
        pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
            self.allowances.get((owner_acc, spender_acc)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.owner_acc
        }

        /// Mint capability check consulted by [`StandardToken::mint`].
        #[ink(message)]
        pub fn is_minter(&self, account_acc: AccountId) -> bool {
            self.minters.get(account_acc).unwrap_or(false)
        }

        // -------- admin / roles --------

        #[ink(message)]
        pub fn set_minter(&mut self, minter_acc: AccountId, enabled: bool) -> Result<()> {
            self.only_owner()?;
            Self::ensure_not_zero(minter_acc)?;
            self.minters.insert(minter_acc, &enabled);
            self.env().emit_event(MinterSet { minter: minter_acc, enabled });
            Ok(())
        }

        // -------- write API --------

        #[ink(message)]
        pub fn transfer(&mut self, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            let from_acc = self.env().caller();
            Self::ensure_not_zero(to_acc)?;
            self.move_balance(from_acc, to_acc, amount_val)?;
            Ok(())
        }

        /// Sets the allowance of `spender_acc` over the caller's tokens.
        ///
        /// A non-zero allowance can only replace a zero one, so changing an
        /// existing approval takes two calls: `approve(spender, 0)` and then
        /// `approve(spender, new_amount)`.
        #[ink(message)]
        pub fn approve(&mut self, spender_acc: AccountId, amount_val: Balance) -> Result<()> {
            let owner_acc = self.env().caller();
            Self::ensure_not_zero(spender_acc)?;
            let current_val = self.allowance(owner_acc, spender_acc);
            if current_val != 0 && amount_val != 0 {
                ink::env::debug_println!(
                    "approve rejected: allowance {} still outstanding",
                    current_val
                );
                return Err(Error::NonZeroAllowanceReset)
            }
            self.allowances.insert((owner_acc, spender_acc), &amount_val);
            self.env().emit_event(Approval {
                owner: owner_acc,
                spender: spender_acc,
                value: amount_val,
            });
            Ok(())
        }

        /// Moves `amount_val` from `from_acc` to `to_acc` on the caller's allowance.
        ///
        /// The allowance is checked before the balance.
        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            amount_val: Balance,
        ) -> Result<()> {
            Self::ensure_not_zero(to_acc)?;

            let caller_acc = self.env().caller();
            let current_allow = self.allowance(from_acc, caller_acc);
            if current_allow < amount_val {
                return Err(Error::InsufficientAllowance)
            }
            let new_allow = current_allow.checked_sub(amount_val).ok_or(Error::Overflow)?;

            self.move_balance(from_acc, to_acc, amount_val)?;
            self.allowances.insert((from_acc, caller_acc), &new_allow);
            Ok(())
        }

        /// Creates `amount_val` new tokens on `to_acc`. Emits no event.
        #[ink(message)]
        pub fn mint(&mut self, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            let caller_acc = self.env().caller();
            if !self.is_minter(caller_acc) {
                return Err(Error::Unauthorized)
            }
            Self::ensure_not_zero(to_acc)?;

            let new_total = self.total_supply.checked_add(amount_val).ok_or(Error::Overflow)?;
            let new_to = self
                .balance_of(to_acc)
                .checked_add(amount_val)
                .ok_or(Error::Overflow)?;

            self.total_supply = new_total;
            self.balances.insert(to_acc, &new_to);
            ink::env::debug_println!("minted {} to {:?}", amount_val, to_acc);
            Ok(())
        }

        /// Destroys `amount_val` of the caller's tokens. Emits no event.
        #[ink(message)]
        pub fn burn(&mut self, amount_val: Balance) -> Result<()> {
            let from_acc = self.env().caller();
            let from_bal = self.balance_of(from_acc);
            if from_bal < amount_val {
                return Err(Error::InsufficientBalance)
            }
            let new_from = from_bal.checked_sub(amount_val).ok_or(Error::Overflow)?;
            let new_total = self.total_supply.checked_sub(amount_val).ok_or(Error::Overflow)?;

            self.balances.insert(from_acc, &new_from);
            self.total_supply = new_total;
            ink::env::debug_println!("burned {} from {:?}", amount_val, from_acc);
            Ok(())
        }

        // ---- internals ----

        fn only_owner(&self) -> Result<()> {
            if self.env().caller() != self.owner_acc {
                return Err(Error::Unauthorized)
            }
            Ok(())
        }

        fn ensure_not_zero(target_acc: AccountId) -> Result<()> {
            if target_acc == zero_account() {
                return Err(Error::InvalidRecipient)
            }
            Ok(())
        }

        /// Debits and credits in one step; nothing is written unless both sides fit.
        fn move_balance(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            amount_val: Balance,
        ) -> Result<()> {
            let from_bal = self.balance_of(from_acc);
            if from_bal < amount_val {
                ink::env::debug_println!(
                    "transfer rejected: balance {} below {}",
                    from_bal,
                    amount_val
                );
                return Err(Error::InsufficientBalance)
            }
            let new_from = from_bal.checked_sub(amount_val).ok_or(Error::Overflow)?;

            // self-transfer: the credit lands on the already debited balance
            let to_bal = if from_acc == to_acc {
                new_from
            } else {
                self.balance_of(to_acc)
            };
            let new_to = to_bal.checked_add(amount_val).ok_or(Error::Overflow)?;

            self.balances.insert(from_acc, &new_from);
            self.balances.insert(to_acc, &new_to);

            self.env().emit_event(Transfer {
                from: from_acc,
                to: to_acc,
                value: amount_val,
            });
            Ok(())
        }
    }


}
