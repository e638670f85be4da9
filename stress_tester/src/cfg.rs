#[derive(Debug, Clone, clap::Parser)]
pub struct Cfg {
    /// Which element is popped first.
    pub order: Order,
    /// Number of producers that will push jobs to the queue.
    #[arg(short, long)]
    pub producer_num: usize,
    /// Number of jobs each producer will push during the test.
    #[arg(short, long)]
    pub job_num: usize,
    /// Number of consumers that will block on the queue waiting for jobs.
    #[arg(short, long, default_value_t = 1)]
    pub consumer_num: usize,
    /// Initial capacity of the queue. Defaults to the total number of jobs.
    #[arg(long)]
    pub capacity: Option<usize>,
    /// Smallest payload size of a job in bytes.
    #[arg(long, default_value_t = 256)]
    pub min_payload: usize,
    /// Largest payload size of a job in bytes.
    #[arg(long, default_value_t = 1_024)]
    pub max_payload: usize,
    /// Smallest priority a job can get.
    #[arg(long, default_value_t = 1)]
    pub min_priority: u64,
    /// Largest priority a job can get.
    #[arg(long, default_value_t = 1_000)]
    pub max_priority: u64,
    // Hard cap on the producers' run time
    #[arg(long, default_value_t = 10)]
    pub run_duration_seconds: u64,
}

#[derive(Debug, Clone, Copy, strum::EnumString, strum::Display, clap::ValueEnum)]
pub enum Order {
    /// Highest priority first.
    #[strum(ascii_case_insensitive)]
    Max,
    /// Lowest priority first.
    #[strum(ascii_case_insensitive)]
    Min,
}
