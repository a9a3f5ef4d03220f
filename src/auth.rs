//! OAuth2 authorization arguments.

use crate::enums::CodeChallengeMethod;
use crate::error::Result;
use crate::handle::{Handle, native_entity};
use crate::marshal::{borrow_str, take_optional_string, take_string, with_optional_str};
use crate::sys;
use std::ptr;

native_entity! {
    /// PKCE code challenge sent with an authorization request.
    pub struct AuthorizationCodeChallenge => Discord_AuthorizationCodeChallenge {
        init: Discord_AuthorizationCodeChallenge_Init,
        drop: Discord_AuthorizationCodeChallenge_Drop,
        clone: Discord_AuthorizationCodeChallenge_Clone,
        equals: Discord_AuthorizationCodeChallenge_Equals,
    }
}

impl AuthorizationCodeChallenge {
    pub fn method(&self) -> Result<CodeChallengeMethod> {
        let this = self.raw()?;
        CodeChallengeMethod::from_raw(unsafe {
            sys::Discord_AuthorizationCodeChallenge_Method(this)
        })
    }

    pub fn set_method(&mut self, value: CodeChallengeMethod) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_AuthorizationCodeChallenge_SetMethod(this, value.as_raw()) };
        Ok(())
    }

    pub fn challenge(&self) -> Result<String> {
        let this = self.raw()?;
        unsafe {
            take_string("AuthorizationCodeChallenge.challenge", |out| {
                sys::Discord_AuthorizationCodeChallenge_Challenge(this, out)
            })
        }
    }

    pub fn set_challenge(&mut self, value: &str) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_AuthorizationCodeChallenge_SetChallenge(this, borrow_str(value)) };
        Ok(())
    }
}

native_entity! {
    /// Arguments for starting an authorization flow.
    ///
    /// `state` and `nonce` are optional: `None` leaves them out of the request,
    /// which is different from sending an empty value.
    pub struct AuthorizationArgs => Discord_AuthorizationArgs {
        init: Discord_AuthorizationArgs_Init,
        drop: Discord_AuthorizationArgs_Drop,
        clone: Discord_AuthorizationArgs_Clone,
        equals: Discord_AuthorizationArgs_Equals,
    }
}

impl AuthorizationArgs {
    /// Application id the request is made for.
    pub fn client_id(&self) -> Result<u64> {
        let this = self.raw()?;
        Ok(unsafe { sys::Discord_AuthorizationArgs_ClientId(this) })
    }

    pub fn set_client_id(&mut self, value: u64) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_AuthorizationArgs_SetClientId(this, value) };
        Ok(())
    }

    /// Space separated OAuth2 scopes.
    pub fn scopes(&self) -> Result<String> {
        let this = self.raw()?;
        unsafe {
            take_string("AuthorizationArgs.scopes", |out| {
                sys::Discord_AuthorizationArgs_Scopes(this, out)
            })
        }
    }

    pub fn set_scopes(&mut self, value: &str) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_AuthorizationArgs_SetScopes(this, borrow_str(value)) };
        Ok(())
    }

    pub fn state(&self) -> Result<Option<String>> {
        let this = self.raw()?;
        unsafe {
            take_optional_string("AuthorizationArgs.state", |out| {
                sys::Discord_AuthorizationArgs_State(this, out)
            })
        }
    }

    pub fn set_state(&mut self, value: Option<&str>) -> Result<()> {
        let this = self.raw()?;
        with_optional_str(value, |value| unsafe {
            sys::Discord_AuthorizationArgs_SetState(this, value)
        });
        Ok(())
    }

    pub fn nonce(&self) -> Result<Option<String>> {
        let this = self.raw()?;
        unsafe {
            take_optional_string("AuthorizationArgs.nonce", |out| {
                sys::Discord_AuthorizationArgs_Nonce(this, out)
            })
        }
    }

    pub fn set_nonce(&mut self, value: Option<&str>) -> Result<()> {
        let this = self.raw()?;
        with_optional_str(value, |value| unsafe {
            sys::Discord_AuthorizationArgs_SetNonce(this, value)
        });
        Ok(())
    }

    /// A copy of the attached code challenge, if any.
    pub fn code_challenge(&self) -> Result<Option<AuthorizationCodeChallenge>> {
        let this = self.raw()?;
        let challenge = unsafe {
            Handle::from_optional(|out| sys::Discord_AuthorizationArgs_CodeChallenge(this, out))
        };
        Ok(challenge.map(AuthorizationCodeChallenge::from_handle))
    }

    /// Attach a copy of `value`, or clear it with `None`.
    pub fn set_code_challenge(&mut self, value: Option<&AuthorizationCodeChallenge>) -> Result<()> {
        let this = self.raw()?;
        let value = match value {
            Some(challenge) => challenge.raw()?.cast_const(),
            None => ptr::null(),
        };
        unsafe { sys::Discord_AuthorizationArgs_SetCodeChallenge(this, value) };
        Ok(())
    }
}

/// Scopes needed for rich presence only.
pub fn default_presence_scopes() -> Result<String> {
    unsafe {
        take_string("default presence scopes", |out| {
            sys::Discord_Client_GetDefaultPresenceScopes(out)
        })
    }
}

/// Scopes needed for presence plus messaging and voice.
pub fn default_communication_scopes() -> Result<String> {
    unsafe {
        take_string("default communication scopes", |out| {
            sys::Discord_Client_GetDefaultCommunicationScopes(out)
        })
    }
}

#[cfg(all(test, feature = "reference-native"))]
mod tests {
    use super::*;
    use crate::SdkError;
    use crate::native::debug_counters;

    #[test]
    fn test_optional_text_keeps_empty_and_absent_apart() {
        let mut args = AuthorizationArgs::new();
        assert_eq!(args.state().unwrap(), None);

        args.set_state(Some("")).unwrap();
        assert_eq!(args.state().unwrap(), Some(String::new()));

        args.set_state(Some("csrf-token")).unwrap();
        assert_eq!(args.state().unwrap().as_deref(), Some("csrf-token"));

        args.set_state(None).unwrap();
        assert_eq!(args.state().unwrap(), None);
    }

    #[test]
    fn test_code_challenge_round_trip() {
        let mut args = AuthorizationArgs::new();
        args.set_client_id(1_234_567_890).unwrap();
        args.set_scopes(&default_presence_scopes().unwrap()).unwrap();
        assert!(args.code_challenge().unwrap().is_none());

        let mut challenge = AuthorizationCodeChallenge::new();
        challenge.set_method(CodeChallengeMethod::S256).unwrap();
        challenge.set_challenge("E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM").unwrap();
        args.set_code_challenge(Some(&challenge)).unwrap();

        let stored = args.code_challenge().unwrap().unwrap();
        assert_eq!(stored, challenge);
        assert_eq!(stored.method().unwrap(), CodeChallengeMethod::S256);

        // The stored copy is independent of the value it was set from.
        challenge.set_challenge("changed").unwrap();
        let stored = args.code_challenge().unwrap().unwrap();
        assert_eq!(
            stored.challenge().unwrap(),
            "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
        );

        args.set_code_challenge(None).unwrap();
        assert!(args.code_challenge().unwrap().is_none());
    }

    #[test]
    fn test_disposed_challenge_is_rejected() {
        let mut args = AuthorizationArgs::new();
        let challenge = AuthorizationCodeChallenge::new();
        challenge.dispose();
        assert_eq!(
            args.set_code_challenge(Some(&challenge)),
            Err(SdkError::disposed("AuthorizationCodeChallenge"))
        );
    }

    #[test]
    fn test_absent_nested_creates_no_handle() {
        let args = AuthorizationArgs::new();
        let before = debug_counters();
        assert!(args.code_challenge().unwrap().is_none());
        assert_eq!(debug_counters(), before);
    }

    #[test]
    fn test_default_scopes() {
        let presence = default_presence_scopes().unwrap();
        let communication = default_communication_scopes().unwrap();
        assert!(presence.contains("openid"));
        assert!(communication.contains("sdk.social_layer"));
    }
}
