pub mod use_mock_costs;
