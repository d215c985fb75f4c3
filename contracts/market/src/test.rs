use super::*;
use crate::events::{CancelLendOrderEvent, CreateLendOrderEvent, FulfillOrderEvent};
use mock_nft::{MockNft, MockNftClient};
use rental_lib::PRICE_UNIT;
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{IntoVal, Symbol, Val, Vec};

const START: u64 = 1_000_000;
const APPROVED_TOKEN_ID: u32 = 0;
const NOT_APPROVED_TOKEN_ID: u32 = 1;

const MIN_DURATION: u64 = 1_000;
const MAX_DURATION: u64 = 100_000;
const PRICE_PER_DAY: u32 = 10;
const LEND_VALID_UNTIL_OFFSET: u64 = 10_000_000;
const RENT_DURATION: u64 = 86_400;
/// Prepaid price of one day at `PRICE_PER_DAY`.
const RENT_VALUE: i128 = PRICE_PER_DAY as i128 * PRICE_UNIT;

struct Setup {
    env: Env,
    market: MarketClient<'static>,
    nft: MockNftClient<'static>,
    token: TokenClient<'static>,
    lender: Address,
    payer: Address,
    renter: Address,
    payment_token: Address,
}

fn setup() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let admin = Address::generate(&env);
    let lender = Address::generate(&env);
    let payer = Address::generate(&env);
    let renter = Address::generate(&env);

    let sac = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let token = TokenClient::new(&env, &sac.address());
    StellarAssetClient::new(&env, &sac.address()).mint(&payer, &(RENT_VALUE * 10));

    let market_id = env.register(Market, ());
    let market = MarketClient::new(&env, &market_id);
    market.initialize(&admin, &sac.address());

    let nft = MockNftClient::new(&env, &env.register(MockNft, ()));
    nft.safe_mint(&lender);
    nft.safe_mint(&lender);
    nft.approve(&lender, &Some(market_id), &APPROVED_TOKEN_ID);

    Setup {
        payment_token: Address::generate(&env),
        env,
        market,
        nft,
        token,
        lender,
        payer,
        renter,
    }
}

impl Setup {
    fn try_create(
        &self,
        lender: &Address,
        token_id: u32,
        min_duration: u64,
        max_duration: u64,
    ) -> Result<LendOrder, RentalError> {
        match self.market.try_create_lend_order(
            lender,
            &self.nft.address,
            &token_id,
            &(START + LEND_VALID_UNTIL_OFFSET),
            &min_duration,
            &max_duration,
            &PRICE_PER_DAY,
            &self.payment_token,
        ) {
            Ok(Ok(order)) => Ok(order),
            Err(Ok(err)) => Err(err),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    fn create(&self) -> LendOrder {
        self.try_create(&self.lender, APPROVED_TOKEN_ID, MIN_DURATION, MAX_DURATION)
            .unwrap()
    }

    fn fulfill(&self, renter: &Address) -> UserInfo {
        self.market.fulfill_order(
            &self.payer,
            &self.nft.address,
            &APPROVED_TOKEN_ID,
            &RENT_DURATION,
            renter,
            &RENT_VALUE,
        )
    }

    fn try_fulfill(&self, duration: u64, value: i128) -> Result<UserInfo, RentalError> {
        match self.market.try_fulfill_order(
            &self.payer,
            &self.nft.address,
            &APPROVED_TOKEN_ID,
            &duration,
            &self.renter,
            &value,
        ) {
            Ok(Ok(info)) => Ok(info),
            Err(Ok(err)) => Err(err),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    fn last_event(&self, name: &str) -> Val {
        let (_, topics, data) = self.env.events().all().last().unwrap();
        let expected: Vec<Val> = (Symbol::new(&self.env, name),).into_val(&self.env);
        assert_eq!(topics, expected);
        data
    }
}

/* ---------------- SETUP ---------------- */

#[test]
fn initialize_only_once() {
    let s = setup();
    assert_eq!(
        s.market
            .try_initialize(&Address::generate(&s.env), &s.token.address),
        Err(Ok(RentalError::AlreadyInitialized))
    );
}

#[test]
fn orders_require_initialize() {
    let env = Env::default();
    env.mock_all_auths();
    let market = MarketClient::new(&env, &env.register(Market, ()));
    let lender = Address::generate(&env);

    assert_eq!(
        market.try_cancel_lend_order(&lender, &Address::generate(&env), &0),
        Err(Ok(RentalError::NotInitialized))
    );
}

#[test]
fn set_admin_moves_admin() {
    let s = setup();
    let next = Address::generate(&s.env);
    s.market.set_admin(&next);

    let data = s.last_event("admin_changed");
    let (_, new_admin): (Address, Address) = data.into_val(&s.env);
    assert_eq!(new_admin, next);
}

#[test]
fn rental_price_matches_whole_days() {
    let s = setup();
    assert_eq!(s.market.rental_price(&PRICE_PER_DAY, &RENT_DURATION), Some(RENT_VALUE));
    assert_eq!(
        s.market.rental_price(&PRICE_PER_DAY, &(RENT_DURATION * 2 - 1)),
        Some(RENT_VALUE)
    );
    assert_eq!(s.market.rental_price(&PRICE_PER_DAY, &(RENT_DURATION - 1)), Some(0));
}

/* ---------------- CREATE ---------------- */

#[test]
fn create_lend_order_lists_and_escrows() {
    let s = setup();
    let order = s.create();

    assert_eq!(order.lend_id, 1);
    assert_eq!(order.lender, s.lender);
    assert_eq!(order.create_time, START);
    assert_eq!(order.min_duration, MIN_DURATION);
    assert_eq!(order.max_duration, MAX_DURATION);
    assert_eq!(order.price_per_day, PRICE_PER_DAY);
    assert_eq!(order.lend_contract, s.market.address);
    assert_eq!(
        s.market.get_lend_order(&s.nft.address, &APPROVED_TOKEN_ID),
        Some(order)
    );
    assert_eq!(s.nft.owner_of(&APPROVED_TOKEN_ID), s.market.address);

    let lend = s
        .market
        .get_lend(&s.nft.address, &APPROVED_TOKEN_ID)
        .unwrap();
    assert_eq!(lend.owner, s.market.address);
    assert_eq!(lend.staker(), Some(&s.lender));
    assert_eq!(lend.config.max_rent_duration, MAX_DURATION);
    assert_eq!(lend.config.share_ratio, PRICE_PER_DAY);
}

#[test]
fn create_lend_order_rejects_listed_nft() {
    let s = setup();
    s.create();
    assert_eq!(
        s.try_create(&s.lender, APPROVED_TOKEN_ID, MIN_DURATION, MAX_DURATION),
        Err(RentalError::AlreadyLend)
    );
}

#[test]
fn create_lend_order_requires_rights_over_nft() {
    let s = setup();

    // Market was never approved for this one.
    assert_eq!(
        s.try_create(&s.lender, NOT_APPROVED_TOKEN_ID, MIN_DURATION, MAX_DURATION),
        Err(RentalError::NotApprovedOrOwner)
    );

    let stranger = Address::generate(&s.env);
    assert_eq!(
        s.try_create(&stranger, APPROVED_TOKEN_ID, MIN_DURATION, MAX_DURATION),
        Err(RentalError::NotApprovedOrOwner)
    );
    assert_eq!(s.nft.owner_of(&APPROVED_TOKEN_ID), s.lender);
}

#[test]
fn create_lend_order_by_operator_returns_to_holder() {
    let s = setup();
    let operator = Address::generate(&s.env);
    s.nft.set_approval_for_all(&s.lender, &operator, &true);

    let order = s
        .try_create(&operator, APPROVED_TOKEN_ID, MIN_DURATION, MAX_DURATION)
        .unwrap();
    assert_eq!(order.lender, operator);

    s.market
        .cancel_lend_order(&operator, &s.nft.address, &APPROVED_TOKEN_ID);
    assert_eq!(s.nft.owner_of(&APPROVED_TOKEN_ID), s.lender);
}

#[test]
fn create_lend_order_emits_event() {
    let s = setup();
    let order = s.create();

    let event: CreateLendOrderEvent = s.last_event("create_lend_order").into_val(&s.env);
    assert_eq!(
        event,
        CreateLendOrderEvent {
            lend_id: order.lend_id,
            lender: s.lender.clone(),
            nft_address: s.nft.address.clone(),
            nft_id: APPROVED_TOKEN_ID,
            min_duration: MIN_DURATION,
            max_duration: MAX_DURATION,
            price_per_day: PRICE_PER_DAY,
            payment_token: s.payment_token.clone(),
        }
    );
}

#[test]
fn create_lend_order_rejects_inverted_range() {
    let s = setup();
    assert_eq!(
        s.try_create(&s.lender, APPROVED_TOKEN_ID, MAX_DURATION + 1_000, MAX_DURATION),
        Err(RentalError::DurationRangeInvalid)
    );
}

#[test]
fn create_lend_order_rejects_short_validity() {
    let s = setup();
    assert_eq!(
        s.try_create(
            &s.lender,
            APPROVED_TOKEN_ID,
            MIN_DURATION,
            LEND_VALID_UNTIL_OFFSET + 1
        ),
        Err(RentalError::ValidUntilTooSoon)
    );
    assert_eq!(
        s.market.get_lend_order(&s.nft.address, &APPROVED_TOKEN_ID),
        None
    );
}

/* ---------------- CANCEL ---------------- */

#[test]
fn cancel_lend_order_when_idle() {
    let s = setup();
    s.create();
    s.market
        .cancel_lend_order(&s.lender, &s.nft.address, &APPROVED_TOKEN_ID);
    assert_eq!(s.nft.owner_of(&APPROVED_TOKEN_ID), s.lender);
}

#[test]
fn cancel_lend_order_blocked_while_rented() {
    let s = setup();
    s.create();
    s.fulfill(&s.renter);

    assert_eq!(
        s.market
            .try_cancel_lend_order(&s.lender, &s.nft.address, &APPROVED_TOKEN_ID),
        Err(Ok(RentalError::CannotRedeem))
    );

    s.env.ledger().set_timestamp(START + RENT_DURATION);
    s.market
        .cancel_lend_order(&s.lender, &s.nft.address, &APPROVED_TOKEN_ID);
    assert_eq!(s.nft.owner_of(&APPROVED_TOKEN_ID), s.lender);
}

#[test]
fn cancel_lend_order_requires_lender() {
    let s = setup();
    assert_eq!(
        s.market
            .try_cancel_lend_order(&s.lender, &s.nft.address, &APPROVED_TOKEN_ID),
        Err(Ok(RentalError::NotLender))
    );

    s.create();
    assert_eq!(
        s.market.try_cancel_lend_order(
            &Address::generate(&s.env),
            &s.nft.address,
            &APPROVED_TOKEN_ID
        ),
        Err(Ok(RentalError::NotLender))
    );
}

#[test]
fn cancel_lend_order_emits_event() {
    let s = setup();
    let order = s.create();
    s.market
        .cancel_lend_order(&s.lender, &s.nft.address, &APPROVED_TOKEN_ID);

    let event: CancelLendOrderEvent = s.last_event("cancel_lend_order").into_val(&s.env);
    assert_eq!(
        event,
        CancelLendOrderEvent {
            lend_id: order.lend_id,
            lender: s.lender.clone(),
            nft_address: s.nft.address.clone(),
            nft_id: APPROVED_TOKEN_ID,
        }
    );
}

#[test]
fn cancel_lend_order_resets_listing() {
    let s = setup();
    s.create();
    s.market
        .cancel_lend_order(&s.lender, &s.nft.address, &APPROVED_TOKEN_ID);

    assert_eq!(
        s.market.get_lend_order(&s.nft.address, &APPROVED_TOKEN_ID),
        None
    );
    assert_eq!(s.market.get_lend(&s.nft.address, &APPROVED_TOKEN_ID), None);

    // The token can be listed again with a fresh id.
    s.nft
        .approve(&s.lender, &Some(s.market.address.clone()), &APPROVED_TOKEN_ID);
    assert_eq!(s.create().lend_id, 2);
}

/* ---------------- FULFILL ---------------- */

#[test]
fn fulfill_order_when_idle() {
    let s = setup();
    s.create();
    let info = s.fulfill(&s.renter);

    assert_eq!(info.start_time, START);
    assert_eq!(info.end_time, START + RENT_DURATION);
    assert_eq!(info.user, s.renter);

    let lend = s
        .market
        .get_lend(&s.nft.address, &APPROVED_TOKEN_ID)
        .unwrap();
    assert_eq!(lend.user_info(), Some(&info));
}

#[test]
fn fulfill_order_pays_lender() {
    let s = setup();
    s.create();
    let before = s.token.balance(&s.payer);
    s.fulfill(&s.renter);

    assert_eq!(s.token.balance(&s.lender), RENT_VALUE);
    assert_eq!(s.token.balance(&s.payer), before - RENT_VALUE);
}

#[test]
fn fulfill_order_blocked_while_rented() {
    let s = setup();
    s.create();
    s.fulfill(&Address::generate(&s.env));

    assert_eq!(
        s.try_fulfill(RENT_DURATION, RENT_VALUE),
        Err(RentalError::CannotRent)
    );

    s.env.ledger().set_timestamp(START + RENT_DURATION);
    assert!(s.try_fulfill(RENT_DURATION, RENT_VALUE).is_ok());
}

#[test]
fn fulfill_order_requires_listing() {
    let s = setup();
    assert_eq!(
        s.try_fulfill(RENT_DURATION, RENT_VALUE),
        Err(RentalError::NotYetLend)
    );
}

#[test]
fn fulfill_order_after_validity_fails() {
    let s = setup();
    s.create();
    s.env
        .ledger()
        .set_timestamp(START + LEND_VALID_UNTIL_OFFSET + 1_000);

    assert_eq!(
        s.try_fulfill(RENT_DURATION, RENT_VALUE),
        Err(RentalError::ExpiredLend)
    );
}

#[test]
fn fulfill_order_checks_duration_bounds() {
    let s = setup();
    s.create();

    assert_eq!(
        s.try_fulfill(MAX_DURATION + 1, RENT_VALUE),
        Err(RentalError::OverMaxRentDuration)
    );
    assert_eq!(
        s.try_fulfill(MIN_DURATION - 1, 0),
        Err(RentalError::UnderMinRentDuration)
    );
}

#[test]
fn fulfill_order_rejects_wrong_payment() {
    let s = setup();
    s.create();

    assert_eq!(s.try_fulfill(RENT_DURATION, 0), Err(RentalError::PaymentMismatch));
    assert_eq!(
        s.try_fulfill(RENT_DURATION, RENT_VALUE + 1),
        Err(RentalError::PaymentMismatch)
    );
    assert_eq!(s.token.balance(&s.lender), 0);
}

#[test]
fn fulfill_order_under_a_day_is_free() {
    let s = setup();
    s.create();

    let info = s.try_fulfill(MIN_DURATION, 0).unwrap();
    assert_eq!(info.end_time, START + MIN_DURATION);
    assert_eq!(s.token.balance(&s.lender), 0);
}

#[test]
fn fulfill_order_emits_event() {
    let s = setup();
    let order = s.create();
    s.fulfill(&s.renter);

    let event: FulfillOrderEvent = s.last_event("fulfill_order").into_val(&s.env);
    assert_eq!(
        event,
        FulfillOrderEvent {
            lend_id: order.lend_id,
            rent_id: 1,
            lender: s.lender.clone(),
            payer: s.payer.clone(),
            renter: s.renter.clone(),
            nft_address: s.nft.address.clone(),
            nft_id: APPROVED_TOKEN_ID,
            start_time: START,
            end_time: START + RENT_DURATION,
            price_per_day: PRICE_PER_DAY,
            payment_token: s.payment_token.clone(),
        }
    );
}
