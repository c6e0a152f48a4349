mod calc_hash;
