// AIGen DAO
// Copyright (C) 2025 AIGen DAO Developers <dev@aigendao.org>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License version 3 as
// published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Defines [Message] trait and implementations for all messages in
//! `aigen_dao_core::message`.

pub use aigen_dao_core::message::*;
use aigen_dao_core::{event, message, Balance, ContentId, ContractAddress, LedgerError, Reputation};

#[derive(thiserror::Error, Debug)]
pub enum EventExtractionError {
    #[error("ExtrinsicSuccess or ExtrinsicFailed event not found")]
    ExtrinsicStatusMissing,
    #[error("Required event is missing")]
    EventMissing,
}

/// Trait implemented for every ledger message
///
/// For every [message::Call] variant that is exposed to the user we implement [Message]
/// for the parameters struct of the call.
pub trait Message: Send + 'static {
    /// Output of a successfully applied message.
    ///
    /// This value is extracted from the events that are deposited when the message is
    /// applied in a block.
    type Output: Send + 'static;

    /// Parse all ledger events deposited by the message and return the appropriate
    /// message result.
    ///
    /// Returns an error if the event list is not well formed. For example if an expected
    /// event is missing.
    fn result_from_events(
        events: Vec<event::Event>,
    ) -> Result<Result<Self::Output, LedgerError>, EventExtractionError>;

    fn into_call(self) -> message::Call;
}

impl Message for message::DeployRewardToken {
    type Output = ContractAddress;

    fn result_from_events(
        events: Vec<event::Event>,
    ) -> Result<Result<Self::Output, LedgerError>, EventExtractionError> {
        extract_token_result(&events, |event| match event {
            event::Token::Deployed(address) => Some(*address),
            _ => None,
        })
    }

    fn into_call(self) -> message::Call {
        self.into()
    }
}

impl Message for message::DeployDao {
    type Output = ContractAddress;

    fn result_from_events(
        events: Vec<event::Event>,
    ) -> Result<Result<Self::Output, LedgerError>, EventExtractionError> {
        extract_dao_result(&events, |event| match event {
            event::Dao::Deployed(address) => Some(*address),
            _ => None,
        })
    }

    fn into_call(self) -> message::Call {
        self.into()
    }
}

impl Message for message::Transfer {
    type Output = ();

    fn result_from_events(
        events: Vec<event::Event>,
    ) -> Result<Result<Self::Output, LedgerError>, EventExtractionError> {
        get_dispatch_result(&events)
    }

    fn into_call(self) -> message::Call {
        self.into()
    }
}

impl Message for message::CreateContent {
    type Output = ContentId;

    fn result_from_events(
        events: Vec<event::Event>,
    ) -> Result<Result<Self::Output, LedgerError>, EventExtractionError> {
        extract_dao_result(&events, |event| match event {
            event::Dao::ContentCreated(_, content_id, _) => Some(*content_id),
            _ => None,
        })
    }

    fn into_call(self) -> message::Call {
        self.into()
    }
}

impl Message for message::Vote {
    type Output = ();

    fn result_from_events(
        events: Vec<event::Event>,
    ) -> Result<Result<Self::Output, LedgerError>, EventExtractionError> {
        extract_dao_result(&events, |event| match event {
            event::Dao::Voted(_, _, _) => Some(()),
            _ => None,
        })
    }

    fn into_call(self) -> message::Call {
        self.into()
    }
}

impl Message for message::BatchVote {
    type Output = ();

    fn result_from_events(
        events: Vec<event::Event>,
    ) -> Result<Result<Self::Output, LedgerError>, EventExtractionError> {
        extract_dao_result(&events, |event| match event {
            event::Dao::BatchVoted(_, _, _) => Some(()),
            _ => None,
        })
    }

    fn into_call(self) -> message::Call {
        self.into()
    }
}

impl Message for message::ClaimReputationRewards {
    /// The claiming account's reputation score after the claim, together with the token
    /// payout moved from the DAO treasury.
    type Output = (Reputation, Balance);

    fn result_from_events(
        events: Vec<event::Event>,
    ) -> Result<Result<Self::Output, LedgerError>, EventExtractionError> {
        extract_dao_result(&events, |event| match event {
            event::Dao::ReputationClaimed(_, _, new_score, payout) => Some((*new_score, *payout)),
            _ => None,
        })
    }

    fn into_call(self) -> message::Call {
        self.into()
    }
}

/// Run `f` on all DAO events to extract a potential output after [get_dispatch_result]
/// is successful. If `f` returns `None` for all events an
/// [EventExtractionError::EventMissing] error is returned.
fn extract_dao_result<T>(
    events: &[event::Event],
    f: impl Fn(&event::Dao) -> Option<T>,
) -> Result<Result<T, LedgerError>, EventExtractionError> {
    let dispatch_result = get_dispatch_result(events)?;
    match dispatch_result {
        Ok(()) => {
            let output = events
                .iter()
                .find_map(|event| match event {
                    event::Event::Dao(dao_event) => f(dao_event),
                    _ => None,
                })
                .ok_or(EventExtractionError::EventMissing)?;
            Ok(Ok(output))
        }
        Err(dispatch_error) => Ok(Err(dispatch_error)),
    }
}

/// Same as [extract_dao_result] for token events.
fn extract_token_result<T>(
    events: &[event::Event],
    f: impl Fn(&event::Token) -> Option<T>,
) -> Result<Result<T, LedgerError>, EventExtractionError> {
    let dispatch_result = get_dispatch_result(events)?;
    match dispatch_result {
        Ok(()) => {
            let output = events
                .iter()
                .find_map(|event| match event {
                    event::Event::Token(token_event) => f(token_event),
                    _ => None,
                })
                .ok_or(EventExtractionError::EventMissing)?;
            Ok(Ok(output))
        }
        Err(dispatch_error) => Ok(Err(dispatch_error)),
    }
}

/// Looks for [event::System::ExtrinsicSuccess] and [event::System::ExtrinsicFailed] in
/// the events and constructs the inner result accordingly. Returns an
/// [EventExtractionError::ExtrinsicStatusMissing] error if none of these events is
/// found.
fn get_dispatch_result(
    events: &[event::Event],
) -> Result<Result<(), LedgerError>, EventExtractionError> {
    events
        .iter()
        .find_map(|event| match event {
            event::Event::System(event::System::ExtrinsicSuccess) => Some(Ok(())),
            event::Event::System(event::System::ExtrinsicFailed(ledger_error)) => {
                Some(Err(*ledger_error))
            }
            _ => None,
        })
        .ok_or(EventExtractionError::ExtrinsicStatusMissing)
}

#[cfg(test)]
mod test {
    use super::*;
    use aigen_dao_core::Hash;

    #[test]
    fn create_content_event_ok() {
        let dao = Hash::random();
        let creator = aigen_dao_core::crypto::Pair::generate().public();
        let events = vec![
            event::Dao::ContentCreated(dao, 7, creator).into(),
            event::System::ExtrinsicSuccess.into(),
        ];
        let result = message::CreateContent::result_from_events(events).unwrap();
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn failed_extrinsic_error() {
        let events = vec![event::System::ExtrinsicFailed(LedgerError::InexistentContent).into()];
        let result = message::Vote::result_from_events(events).unwrap();
        assert_eq!(result, Err(LedgerError::InexistentContent));
    }

    #[test]
    fn missing_status_error() {
        let result = message::Vote::result_from_events(vec![]);
        assert!(matches!(
            result,
            Err(EventExtractionError::ExtrinsicStatusMissing)
        ));
    }

    #[test]
    fn missing_domain_event_error() {
        let events = vec![event::System::ExtrinsicSuccess.into()];
        let result = message::CreateContent::result_from_events(events);
        assert!(matches!(result, Err(EventExtractionError::EventMissing)));
    }
}
