//! Walk through every algorithm family on small fixed trees.

use arborist::{
    build_from_preorder_inorder, deserialize, flatten_to_right_chain, lowest_common_ancestor,
    minimum_burn_time, nodes_at_distance, satisfies_children_sum, serialize,
    serialize_level_order, threaded_inorder, Tree,
};

fn main() -> anyhow::Result<()> {
    // Reconstruction + canonical form
    let tree = build_from_preorder_inorder(&[3, 9, 20, 15, 7], &[9, 3, 15, 20, 7])?;
    println!("rebuilt:      {}", serialize(&tree));
    println!("level order:  {}", serialize_level_order(&tree));

    // Queries on 1(2(4, 5), 3)
    let tree: Tree<i64> = deserialize("1,2,4,N,N,5,N,N,3,N,N")?;
    let lca = lowest_common_ancestor(&tree, &4, &5)?;
    println!("lca(4, 5):    {}", tree.value(lca));

    let mut layer = nodes_at_distance(&tree, &5, 2)?;
    layer.sort_unstable();
    println!("dist(5, 2):   {:?}", layer);
    println!("burn from 5:  {}", minimum_burn_time(&tree, &5)?);

    // Transforms
    let mut walked = tree.clone();
    println!("inorder:      {:?}", threaded_inorder(&mut walked));
    let mut flat = tree;
    flatten_to_right_chain(&mut flat);
    println!("flattened:    {}", serialize(&flat));

    // Invariant
    let sums: Tree<i64> = deserialize("10,8,3,N,N,5,N,N,2,N,2,N,N")?;
    println!("children-sum: {}", satisfies_children_sum(&sums));

    Ok(())
}
