mod mock_tx;
