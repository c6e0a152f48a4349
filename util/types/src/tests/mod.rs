mod calc_hash;
mod dep_group;
