use std::io::Write;
use std::pin::pin;
use std::sync::Arc;

use ethers::utils::to_checksum;
use futures::{stream, Stream, StreamExt};
use leaderboard_client::{Address, Client, ClientError, U256};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// 1-based position on the leaderboard
    pub rank: u64,
    pub address: Address,
    pub name: String,
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}. {} ({})",
            self.rank,
            self.name,
            to_checksum(&self.address, None)
        )
    }
}

#[derive(Debug)]
pub enum StopReason {
    /// The zero address was found at `index`
    EndOfList { index: u64 },
    /// A remote call for `index` failed
    Failed { index: u64, error: ClientError },
    /// All requested entries were read
    Exhausted,
}

#[derive(Debug)]
pub struct ReadSummary {
    pub participants: Vec<Participant>,
    pub stop: StopReason,
}

/// Reads leaderboard entries one at a time until the zero address,
/// a failed call, or the entry cap.
pub struct LeaderboardReader {
    client: Arc<dyn Client>,
}

impl LeaderboardReader {
    pub fn new(client: Arc<dyn Client>) -> Self {
        Self { client }
    }

    /// Read the entry at `index`. Returns `None` when the slot holds the zero address.
    pub async fn fetch(&self, index: u64) -> Result<Option<Participant>, ClientError> {
        let address = self.client.leader_board(U256::from(index)).await?;
        if address.is_zero() {
            return Ok(None);
        }
        let name = self.client.user_name(address).await?;
        Ok(Some(Participant {
            rank: index + 1,
            address,
            name,
        }))
    }

    /// Lazily read up to `max_entries` participants. The stream ends at the
    /// zero address and right after yielding an error.
    pub fn participants(
        &self,
        max_entries: u64,
    ) -> impl Stream<Item = Result<Participant, ClientError>> + '_ {
        stream::unfold(Some(0), move |next_index: Option<u64>| async move {
            let index = next_index.filter(|i| *i < max_entries)?;
            log::debug!("Reading leaderboard entry {index}");
            match self.fetch(index).await {
                Ok(Some(participant)) => Some((Ok(participant), Some(index + 1))),
                Ok(None) => None,
                Err(e) => Some((Err(e), None)),
            }
        })
    }

    /// Print up to `max_entries` participants followed by a status line.
    /// Remote failures end the listing and are reported in the summary,
    /// only errors writing to `out` are returned.
    pub async fn run(
        &self,
        max_entries: u64,
        out: &mut impl Write,
    ) -> anyhow::Result<ReadSummary> {
        writeln!(out, "Reading the first {max_entries} leaderboard entries:")?;

        let mut participants = Vec::new();
        let mut failure = None;
        let mut stream = pin!(self.participants(max_entries));
        while let Some(result) = stream.next().await {
            match result {
                Ok(participant) => {
                    writeln!(out, "{participant}")?;
                    participants.push(participant);
                }
                Err(e) => failure = Some(e),
            }
        }

        let index = participants.len() as u64;
        let stop = match failure {
            Some(error) => {
                writeln!(out, "End of list at position {index} due to error: {error}")?;
                StopReason::Failed { index, error }
            }
            None if index < max_entries => {
                writeln!(out, "End of list at position {index}")?;
                StopReason::EndOfList { index }
            }
            None => {
                writeln!(out, "Read all {max_entries} entries")?;
                StopReason::Exhausted
            }
        };
        out.flush()?;
        Ok(ReadSummary { participants, stop })
    }
}
