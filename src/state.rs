//! Parser state machine.

/// Which structure a [`crate::Parser`] was created for, recorded so an
/// inner list knows which params state to return to when it closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Container {
    Dict,
    List,
    Item,
}

/// The parser's current position in the grammar.
///
/// Every public iterator method asserts the states it is willing to run
/// from; a state outside that set reaching the method is a caller bug
/// (calling `param` on a parser built for `dict` after it finished, say),
/// not a malformed-input condition, so it panics rather than returning
/// an `Error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    Initial,
    AfterItem,
    AfterDictValue,
    AfterListItem,
    ItemParams,
    ListItemParams,
    DictValueParams,
    ItemInnerList,
    ListInnerList,
    DictValueInnerList,
    InnerListBareItem,
    InnerListBareItemParams,
}
