use crate::MoveError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MoveKind {
    TakeThree,
    TakeTwo,
    Reserve,
    Buy,
}

impl MoveKind {
    pub const ALL: [MoveKind; 4] = [
        MoveKind::TakeThree,
        MoveKind::TakeTwo,
        MoveKind::Reserve,
        MoveKind::Buy,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Self::TakeThree => "t3",
            Self::TakeTwo => "t2",
            Self::Reserve => "r",
            Self::Buy => "b",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A proposed move. Gem payloads are raw per-colour counts and are checked by
/// the validator, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    TakeThree(Vec<u8>),
    TakeTwo(Vec<u8>),
    Reserve {
        tier: u8,
        slot: usize,
    },
    Buy {
        tier: u8,
        slot: usize,
        from_reserve: bool,
    },
}

impl Move {
    pub fn kind(&self) -> MoveKind {
        match self {
            Self::TakeThree(_) => MoveKind::TakeThree,
            Self::TakeTwo(_) => MoveKind::TakeTwo,
            Self::Reserve { .. } => MoveKind::Reserve,
            Self::Buy { .. } => MoveKind::Buy,
        }
    }

    /// Builds a move from a tag and integer arguments, e.g. `("b", [1, 0, 0])`.
    pub fn parse(tag: &str, args: &[i64]) -> Result<Self, MoveError> {
        let kind =
            MoveKind::from_tag(tag).ok_or_else(|| MoveError::UnknownMoveKind(tag.to_string()))?;
        match kind {
            MoveKind::TakeThree => Ok(Self::TakeThree(gem_args(args)?)),
            MoveKind::TakeTwo => Ok(Self::TakeTwo(gem_args(args)?)),
            MoveKind::Reserve => {
                let [tier, slot] = fixed_args::<2>(kind, args)?;
                Ok(Self::Reserve {
                    tier: tier_arg(tier)?,
                    slot: slot_arg(slot)?,
                })
            }
            MoveKind::Buy => {
                let [tier, slot, from_reserve] = fixed_args::<3>(kind, args)?;
                let from_reserve = match from_reserve {
                    0 => false,
                    1 => true,
                    other => {
                        return Err(MoveError::InvalidShape(format!(
                            "reserve flag must be 0 or 1, got {other}"
                        )))
                    }
                };
                Ok(Self::Buy {
                    tier: tier_arg(tier)?,
                    slot: slot_arg(slot)?,
                    from_reserve,
                })
            }
        }
    }

    /// Parses a whitespace separated line such as `t3 1 1 1 0 0`.
    pub fn parse_line(line: &str) -> Result<Self, MoveError> {
        let mut words = line.split_whitespace();
        let tag = words
            .next()
            .ok_or_else(|| MoveError::InvalidShape("empty move".to_string()))?;
        let args = words
            .map(|word| {
                word.parse::<i64>()
                    .map_err(|_| MoveError::InvalidShape(format!("{word:?} is not a number")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::parse(tag, &args)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TakeThree(gems) | Self::TakeTwo(gems) => {
                write!(f, "{}", self.kind())?;
                for count in gems {
                    write!(f, " {count}")?;
                }
                Ok(())
            }
            Self::Reserve { tier, slot } => write!(f, "r {tier} {slot}"),
            Self::Buy {
                tier,
                slot,
                from_reserve,
            } => write!(f, "b {tier} {slot} {}", u8::from(*from_reserve)),
        }
    }
}

fn gem_args(args: &[i64]) -> Result<Vec<u8>, MoveError> {
    args.iter()
        .map(|value| {
            u8::try_from(*value)
                .map_err(|_| MoveError::InvalidShape(format!("gem count {value} out of range")))
        })
        .collect()
}

fn fixed_args<const N: usize>(kind: MoveKind, args: &[i64]) -> Result<[i64; N], MoveError> {
    args.try_into().map_err(|_| {
        MoveError::InvalidShape(format!(
            "{kind} takes {N} arguments, got {}",
            args.len()
        ))
    })
}

fn tier_arg(value: i64) -> Result<u8, MoveError> {
    u8::try_from(value).map_err(|_| MoveError::InvalidTarget { tier: value })
}

fn slot_arg(value: i64) -> Result<usize, MoveError> {
    usize::try_from(value)
        .map_err(|_| MoveError::InvalidShape(format!("slot {value} out of range")))
}
