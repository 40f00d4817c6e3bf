//! Captured single-round choice tables per game and model, from the chat
//! session transcripts. Values are verbatim; sessions where the model
//! refused to state a number are `None` and get dropped at set construction.

pub const DICTATOR_GPT4: &[f64] = &[
    60.0, 70.0, 50.0, 80.0, 60.0, 70.0, 50.0, 80.0, 60.0, 70.0, 50.0, 80.0, 60.0, 70.0, 50.0,
    80.0, 60.0, 70.0, 50.0, 80.0, 60.0, 70.0, 50.0, 80.0, 60.0, 70.0, 50.0, 80.0, 60.0, 70.0,
];

pub const DICTATOR_GPT3: &[f64] = &[
    25.0, 35.0, 70.0, 30.0, 20.0, 25.0, 40.0, 80.0, 30.0, 30.0, 40.0, 30.0, 30.0, 30.0, 30.0,
    30.0, 40.0, 40.0, 30.0, 30.0, 40.0, 30.0, 60.0, 20.0, 40.0, 25.0, 30.0, 30.0, 30.0,
];

pub const ULTIMATUM_PROPOSE_GPT4: &[f64] = &[
    50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0,
    50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0,
];

pub const ULTIMATUM_PROPOSE_GPT3: &[f64] = &[
    40.0, 40.0, 40.0, 30.0, 70.0, 70.0, 50.0, 40.0, 40.0, 40.0, 40.0, 40.0, 40.0, 40.0, 40.0,
    40.0, 40.0, 40.0, 30.0, 30.0, 35.0, 50.0, 40.0, 70.0, 40.0, 60.0, 60.0, 70.0, 40.0, 50.0,
];

pub const ULTIMATUM_ACCEPT_GPT4: &[f64] = &[
    50.0, 50.0, 50.0, 1.0, 1.0, 1.0, 50.0, 25.0, 50.0, 1.0, 1.0, 20.0, 50.0, 50.0, 50.0, 20.0,
    50.0, 1.0, 1.0, 1.0, 50.0, 50.0, 50.0, 1.0, 1.0, 1.0, 20.0, 1.0, 0.0, 1.0,
];

pub const ULTIMATUM_ACCEPT_GPT3: &[Option<f64>] = &[
    None,
    Some(50.0),
    Some(50.0),
    Some(50.0),
    Some(50.0),
    Some(30.0),
    None,
    None,
    Some(30.0),
    Some(33.33),
    Some(40.0),
    None,
    Some(50.0),
    Some(40.0),
    None,
    Some(1.0),
    Some(30.0),
    None,
    Some(10.0),
    Some(50.0),
    Some(30.0),
    Some(10.0),
    Some(30.0),
    None,
    Some(30.0),
    None,
    Some(10.0),
    Some(30.0),
    Some(30.0),
    Some(30.0),
];

pub const TRUST_INVEST_GPT4: &[f64] = &[
    50.0, 50.0, 40.0, 30.0, 50.0, 50.0, 40.0, 50.0, 50.0, 50.0, 50.0, 50.0, 30.0, 30.0, 50.0,
    50.0, 50.0, 40.0, 40.0, 50.0, 50.0, 50.0, 50.0, 40.0, 50.0, 50.0, 50.0, 50.0,
];

pub const TRUST_INVEST_GPT3: &[f64] = &[
    50.0, 50.0, 30.0, 30.0, 30.0, 60.0, 50.0, 40.0, 20.0, 20.0, 50.0, 40.0, 30.0, 20.0, 30.0,
    20.0, 30.0, 60.0, 50.0, 30.0, 50.0, 20.0, 20.0, 30.0, 50.0, 30.0, 30.0, 50.0, 40.0, 30.0,
];

pub const TRUST_RETURN_10_GPT4: &[f64] = &[
    20.0, 20.0, 20.0, 20.0, 15.0, 15.0, 15.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 15.0, 20.0,
    20.0, 20.0, 20.0, 20.0, 15.0, 15.0, 20.0, 15.0, 15.0, 15.0, 15.0, 15.0, 20.0, 20.0, 15.0,
];

pub const TRUST_RETURN_10_GPT3: &[f64] = &[
    20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 15.0, 25.0, 30.0, 30.0, 20.0, 25.0, 30.0, 20.0, 20.0,
    18.0, 20.0, 20.0, 20.0, 25.0, 25.0, 25.0, 30.0,
];

pub const TRUST_RETURN_50_GPT4: &[f64] = &[
    100.0, 75.0, 75.0, 75.0, 75.0, 75.0, 100.0, 75.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0,
    75.0, 100.0, 75.0, 75.0, 75.0, 100.0, 100.0, 100.0, 75.0, 100.0, 100.0, 100.0, 100.0, 75.0,
    100.0, 75.0,
];

pub const TRUST_RETURN_50_GPT3: &[f64] = &[
    150.0, 100.0, 150.0, 150.0, 50.0, 150.0, 100.0, 150.0, 100.0, 100.0, 100.0, 150.0, 100.0,
    100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0,
];

pub const TRUST_RETURN_100_GPT4: &[f64] = &[
    200.0, 200.0, 150.0, 150.0, 150.0, 150.0, 150.0, 150.0, 150.0, 150.0, 150.0, 150.0, 150.0,
    150.0, 150.0, 150.0, 150.0, 150.0, 200.0, 200.0, 150.0, 150.0, 150.0, 150.0, 150.0, 150.0,
    150.0, 150.0, 150.0, 150.0,
];

pub const TRUST_RETURN_100_GPT3: &[f64] = &[
    225.0, 225.0, 300.0, 300.0, 220.0, 300.0, 250.0, 200.0, 200.0, 250.0, 200.0, 200.0,
];
