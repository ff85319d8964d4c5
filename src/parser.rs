//! The state machine: dict, list, item, param, and inner-list iterators.

use crate::classify::{is_key_cont, is_key_start};
use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind};
use crate::scan;
use crate::state::{Container, State};
use crate::value::{Key, Value};

/// A key and the value bound to it, as returned by [`Parser::dict`] and
/// [`Parser::param`].
pub type Entry<'a> = (Key<'a>, Value<'a>);

/// An incremental parser over one Structured Field Value.
///
/// Construct once with [`Parser::new`] and drive it with whichever
/// top-level method matches the field's declared type (dictionary, list,
/// or item); each call returns one element, or `Ok(None)` once the
/// structure is exhausted. A sub-structure the caller does not descend
/// into (an inner list, a parameter tail) is silently skipped on the
/// next top-level call.
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    state: State,
    back_state: Option<Container>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
            state: State::Initial,
            back_state: None,
        }
    }

    /// Walks one key/value pair of a dictionary-style field.
    pub fn dict(&mut self) -> Result<Option<Entry<'a>>, Error> {
        match self.state {
            State::DictValueInnerList => {
                self.skip_inner_list()?;
                self.skip_params()?;
                if !self.next_key_or_item()? {
                    return Ok(None);
                }
            }
            State::DictValueParams => {
                self.skip_params()?;
                if !self.next_key_or_item()? {
                    return Ok(None);
                }
            }
            State::AfterDictValue => {
                if !self.next_key_or_item()? {
                    return Ok(None);
                }
            }
            State::Initial => {
                self.cursor.skip_sp();
                if self.cursor.is_eof() {
                    return Ok(None);
                }
            }
            other => wrong_state("dict", other),
        }

        let (key, value) = self.dict_key_and_value()?;
        Ok(Some((key, value)))
    }

    /// Walks one element of a list-style field.
    pub fn list(&mut self) -> Result<Option<Value<'a>>, Error> {
        match self.state {
            State::ListInnerList => {
                self.skip_inner_list()?;
                self.skip_params()?;
                if !self.next_key_or_item()? {
                    return Ok(None);
                }
            }
            State::ListItemParams => {
                self.skip_params()?;
                if !self.next_key_or_item()? {
                    return Ok(None);
                }
            }
            State::AfterListItem => {
                if !self.next_key_or_item()? {
                    return Ok(None);
                }
            }
            State::Initial => {
                self.cursor.skip_sp();
                if self.cursor.is_eof() {
                    return Ok(None);
                }
            }
            other => wrong_state("list", other),
        }

        if self.cursor.peek() == Some(b'(') {
            self.cursor.bump();
            self.state = State::ListInnerList;
            return Ok(Some(Value::InnerList));
        }

        let value = scan::bare_item(&mut self.cursor)?;
        self.state = State::ListItemParams;
        Ok(Some(value))
    }

    /// Walks the single top-level value of an item-style field.
    ///
    /// Unlike [`Parser::dict`] and [`Parser::list`], an empty input is a
    /// parse error here rather than an empty structure: an item field
    /// always carries exactly one value.
    pub fn item(&mut self) -> Result<Option<Value<'a>>, Error> {
        match self.state {
            State::Initial => {
                self.cursor.skip_sp();
                if self.cursor.is_eof() {
                    return Err(Error::new(self.cursor.pos(), ErrorKind::UnexpectedEof));
                }
            }
            State::ItemInnerList => {
                self.skip_inner_list()?;
                self.skip_params()?;
                return self.finish_item();
            }
            State::ItemParams => {
                self.skip_params()?;
                return self.finish_item();
            }
            State::AfterItem => {
                return self.finish_item();
            }
            other => wrong_state("item", other),
        }

        if self.cursor.peek() == Some(b'(') {
            self.cursor.bump();
            self.state = State::ItemInnerList;
            return Ok(Some(Value::InnerList));
        }

        let value = scan::bare_item(&mut self.cursor)?;
        self.state = State::ItemParams;
        Ok(Some(value))
    }

    fn finish_item(&mut self) -> Result<Option<Value<'a>>, Error> {
        self.cursor.skip_sp();
        if !self.cursor.is_eof() {
            return Err(Error::new(self.cursor.pos(), ErrorKind::TrailingBytes));
        }
        Ok(None)
    }

    /// Walks one `; key[=bare-item]` parameter.
    pub fn param(&mut self) -> Result<Option<Entry<'a>>, Error> {
        match self.state {
            State::DictValueInnerList | State::ListInnerList => {
                self.skip_inner_list()?;
            }
            State::DictValueParams
            | State::ListItemParams
            | State::ItemParams
            | State::InnerListBareItemParams => {}
            other => wrong_state("param", other),
        }

        if self.cursor.peek() != Some(b';') {
            self.state = match self.state {
                State::DictValueParams => State::AfterDictValue,
                State::ListItemParams => State::AfterListItem,
                State::InnerListBareItemParams => State::InnerListBareItem,
                State::ItemParams => State::AfterItem,
                other => unreachable!("param left the parser in an unexpected state: {other:?}"),
            };
            return Ok(None);
        }

        self.cursor.bump();
        self.cursor.skip_sp();
        if self.cursor.is_eof() {
            return Err(Error::new(self.cursor.pos(), ErrorKind::UnexpectedEof));
        }

        let key = self.key()?;

        if self.cursor.peek() != Some(b'=') {
            return Ok(Some((key, Value::Boolean(true))));
        }

        self.cursor.bump();
        if self.cursor.is_eof() {
            return Err(Error::new(self.cursor.pos(), ErrorKind::UnexpectedEof));
        }

        let value = scan::bare_item(&mut self.cursor)?;
        Ok(Some((key, value)))
    }

    /// Walks one element of an inner list, `( SP* (bare-item params)* SP* )`.
    pub fn inner_list(&mut self) -> Result<Option<Value<'a>>, Error> {
        match self.state {
            State::DictValueInnerList | State::ListInnerList | State::ItemInnerList => {
                self.back_state = Some(match self.state {
                    State::DictValueInnerList => Container::Dict,
                    State::ListInnerList => Container::List,
                    State::ItemInnerList => Container::Item,
                    _ => unreachable!(),
                });
                self.state = State::InnerListBareItem;
                self.cursor.skip_sp();
                if self.cursor.is_eof() {
                    return Err(Error::new(self.cursor.pos(), ErrorKind::UnexpectedEof));
                }
            }
            State::InnerListBareItemParams => {
                self.skip_params()?;
                self.state = State::InnerListBareItem;
                self.require_sp_or_close()?;
            }
            State::InnerListBareItem => {
                self.require_sp_or_close()?;
            }
            other => wrong_state("inner_list", other),
        }

        if self.cursor.peek() == Some(b')') {
            self.cursor.bump();
            let back = self.back_state.take();
            self.state = match back {
                Some(Container::Dict) => State::DictValueParams,
                Some(Container::List) => State::ListItemParams,
                Some(Container::Item) => State::ItemParams,
                None => unreachable!("inner_list closed with no back_state recorded"),
            };
            return Ok(None);
        }

        let value = scan::bare_item(&mut self.cursor)?;
        self.state = State::InnerListBareItemParams;
        Ok(Some(value))
    }

    fn require_sp_or_close(&mut self) -> Result<(), Error> {
        if self.cursor.is_eof() {
            return Err(Error::new(self.cursor.pos(), ErrorKind::UnexpectedEof));
        }
        match self.cursor.peek() {
            Some(b' ') => {
                self.cursor.skip_sp();
                if self.cursor.is_eof() {
                    return Err(Error::new(self.cursor.pos(), ErrorKind::UnexpectedEof));
                }
                Ok(())
            }
            Some(b')') => Ok(()),
            Some(b) => Err(Error::new(self.cursor.pos(), ErrorKind::UnexpectedByte(b))),
            None => unreachable!("eof already checked above"),
        }
    }

    fn dict_key_and_value(&mut self) -> Result<Entry<'a>, Error> {
        let key = self.key()?;

        if self.cursor.peek() != Some(b'=') {
            self.state = State::DictValueParams;
            return Ok((key, Value::Boolean(true)));
        }

        self.cursor.bump();
        if self.cursor.is_eof() {
            return Err(Error::new(self.cursor.pos(), ErrorKind::UnexpectedEof));
        }

        if self.cursor.peek() == Some(b'(') {
            self.cursor.bump();
            self.state = State::DictValueInnerList;
            return Ok((key, Value::InnerList));
        }

        let value = scan::bare_item(&mut self.cursor)?;
        self.state = State::DictValueParams;
        Ok((key, value))
    }

    fn key(&mut self) -> Result<Key<'a>, Error> {
        match self.cursor.peek() {
            Some(b) if is_key_start(b) => {}
            Some(b) => return Err(Error::new(self.cursor.pos(), ErrorKind::UnexpectedByte(b))),
            None => return Err(Error::new(self.cursor.pos(), ErrorKind::UnexpectedEof)),
        }

        let start = self.cursor.pos();
        self.cursor.bump();

        while let Some(b) = self.cursor.peek() {
            if !is_key_cont(b) {
                break;
            }
            self.cursor.bump();
        }

        Ok(Key::new(self.cursor.slice_from(start)))
    }

    /// Looks for the `, <element>` that continues a dict/list after a
    /// completed element. Returns `Ok(false)` when the input simply ends
    /// here (a valid way for the structure to close); a comma with
    /// nothing but trailing whitespace after it is a parse error, since
    /// the grammar does not allow a trailing empty element.
    fn next_key_or_item(&mut self) -> Result<bool, Error> {
        self.cursor.skip_ows();
        if self.cursor.is_eof() {
            return Ok(false);
        }
        match self.cursor.peek() {
            Some(b',') => self.cursor.bump(),
            Some(b) => return Err(Error::new(self.cursor.pos(), ErrorKind::UnexpectedByte(b))),
            None => unreachable!("eof already checked above"),
        }
        self.cursor.skip_ows();
        if self.cursor.is_eof() {
            return Err(Error::new(self.cursor.pos(), ErrorKind::TrailingSeparator));
        }
        Ok(true)
    }

    fn skip_params(&mut self) -> Result<(), Error> {
        loop {
            if self.param()?.is_none() {
                return Ok(());
            }
        }
    }

    fn skip_inner_list(&mut self) -> Result<(), Error> {
        loop {
            if self.inner_list()?.is_none() {
                return Ok(());
            }
        }
    }
}

fn wrong_state(method: &'static str, state: State) -> ! {
    panic!("Parser::{method} called from an incompatible state: {state:?}");
}
